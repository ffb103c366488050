use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use triquito_protocol::{InputEvent, MatchUpdate};

use crate::history::HistoryWriter;
use crate::session::GameSession;

mod history;
mod render;
mod session;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Rows (and columns) of the board; anything below 3 is raised to 3
    #[arg(short, long, default_value_t = 3)]
    rows: u8,

    /// Where to write the turn-history log
    #[arg(long, default_value = "History.txt")]
    history: PathBuf,

    /// Pool of display symbols the players draw from
    #[arg(long, default_value = "XO#@%&")]
    symbols: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();
    log::debug!("args: {args:?}");

    let pool: Vec<char> = args.symbols.chars().collect();
    anyhow::ensure!(pool.len() >= 2, "the symbol pool needs at least two symbols");

    let mut session = GameSession::new(args.rows, &pool);
    let rows = session.engine().rows();
    println!("Tic-tac-toe on a {rows}x{rows} grid. Enter moves as `row col`, `q` quits.");

    let stdin = io::stdin();
    let mut input = stdin.lock().lines();

    loop {
        let mut history = HistoryWriter::create(&args.history)?;
        if !play_match(&mut session, &mut history, &mut input)? {
            return Ok(());
        }
        session.apply(InputEvent::Restart)?;
    }
}

/// Runs one match to its end. Returns whether the players asked for another.
fn play_match(
    session: &mut GameSession,
    history: &mut HistoryWriter,
    input: &mut impl Iterator<Item = io::Result<String>>,
) -> anyhow::Result<bool> {
    loop {
        println!("{}", render::board(session, None));
        let to_move = session.engine().to_move();
        print!(
            "Player {} ({}) > ",
            to_move.id(),
            session.symbol_of(to_move)
        );
        io::stdout().flush()?;

        let Some(line) = input.next() else {
            return Ok(false);
        };
        let line = line.context("could not read from stdin")?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }
        if matches!(line, "q" | "quit" | "exit") {
            return Ok(false);
        }

        let Some((row, col)) = parse_coords(line) else {
            println!("Enter a move as `row col`, e.g. `0 2`.");
            continue;
        };

        let update = match session.apply(InputEvent::CellSelected { row, col }) {
            Ok(update) => update,
            // rejected input leaves the match untouched
            Err(err) => {
                println!("{err}.");
                continue;
            }
        };
        history.record_move(to_move.id(), (row, col))?;
        log::debug!("update: {update:?}");

        match &update {
            MatchUpdate::Ongoing { .. } => {}
            MatchUpdate::Won { player, line } => {
                println!("{}", render::board(session, Some(line.as_slice())));
                println!("Player {player} has won!");
                history.record_summary(&update)?;
                report_duration(session);
                return ask_play_again(input);
            }
            MatchUpdate::Draw => {
                println!("{}", render::board(session, None));
                println!("Draw!");
                history.record_summary(&update)?;
                report_duration(session);
                return ask_play_again(input);
            }
        }
    }
}

fn report_duration(session: &GameSession) {
    println!(
        "Match finished after {} moves in {}s.",
        session.engine().move_count(),
        session.elapsed_secs(chrono::Utc::now())
    );
}

fn ask_play_again(input: &mut impl Iterator<Item = io::Result<String>>) -> anyhow::Result<bool> {
    print!("Play again? [y/N] ");
    io::stdout().flush()?;

    let Some(line) = input.next() else {
        return Ok(false);
    };
    let line = line.context("could not read from stdin")?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}

fn parse_coords(line: &str) -> Option<(u8, u8)> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    parts.next().is_none().then_some((row, col))
}
