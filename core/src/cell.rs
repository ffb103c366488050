use serde::{Deserialize, Serialize};

/// Player identity. Display symbols belong to the presentation layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const fn opponent(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// Stable numeric identity (1 or 2) used in logs and notifications.
    pub const fn id(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

/// Canonical cell state stored by the match engine.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Owned(Player),
}

impl Cell {
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn is_owned_by(self, player: Player) -> bool {
        match self {
            Self::Owned(owner) => owner.id() == player.id(),
            Self::Empty => false,
        }
    }

    pub const fn owner(self) -> Option<Player> {
        match self {
            Self::Empty => None,
            Self::Owned(player) => Some(player),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponents_alternate() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent().opponent(), Player::Two);
    }

    #[test]
    fn ownership_predicates() {
        assert!(Cell::Empty.is_empty());
        assert!(Cell::Owned(Player::One).is_owned_by(Player::One));
        assert!(!Cell::Owned(Player::One).is_owned_by(Player::Two));
        assert_eq!(Cell::default(), Cell::Empty);
        assert_eq!(Cell::Owned(Player::Two).owner(), Some(Player::Two));
    }
}
