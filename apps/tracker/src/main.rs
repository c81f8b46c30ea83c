//! `wizard-tracker`: a command-line score sheet for Wizard.
//!
//! Each invocation loads the session file, applies one command, saves, and
//! prints the result.

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracker::config::{log_format, state_path};
use tracker::domain::scoring::ScorePreview;
use tracker::domain::snapshot::{HistoryRow, SessionSnapshot};
use tracker::telemetry::init_tracing;
use tracker::{AppError, DealingMode, FileStore, Session};

#[derive(Parser)]
#[command(name = "wizard-tracker")]
#[command(about = "Score sheet for the card game Wizard")]
struct Args {
    /// Session file (defaults to TRACKER_STATE_PATH, then ./wizard.tracker.v1.json)
    #[arg(long, global = true)]
    state: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the score sheet
    Show {
        /// Print the read model as JSON
        #[arg(long)]
        json: bool,
    },
    /// Discard the session and start over
    New,
    /// Add a player (only before the first round)
    AddPlayer { name: String },
    /// Remove a player by id or name (only before the first round)
    RemovePlayer { player: String },
    /// Set the dealing mode
    Mode { mode: ModeArg },
    /// Set the maximum hand size; omit to derive it from the player count
    MaxHand { value: Option<i64> },
    /// Set the hand size for manual mode; omit to clear it
    Hand { value: Option<i64> },
    /// Enter bid and tricks for a player
    Input {
        player: String,
        #[arg(long, allow_negative_numbers = true)]
        bid: Option<i64>,
        #[arg(long, allow_negative_numbers = true)]
        won: Option<i64>,
        /// Forget what was entered for this player
        #[arg(long, conflicts_with_all = ["bid", "won"])]
        clear: bool,
    },
    /// Record the round from the entered values
    Save,
    /// Remove a round; defaults to the round saved last
    Undo { round_id: Option<String> },
    /// List recorded rounds, latest first
    History,
    /// Write the session as JSON
    Export {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Replace the session with a JSON document (`-` reads stdin)
    Import { file: String },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Up,
    Updown,
    Manual,
}

impl From<ModeArg> for DealingMode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Up => DealingMode::Ascending,
            ModeArg::Updown => DealingMode::Pyramid,
            ModeArg::Manual => DealingMode::Manual,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {}", e.code(), e.detail());
            ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(1))
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    init_tracing(args.verbose, log_format()?);

    let path = state_path(args.state)?;
    let mut session = Session::open(FileStore::new(path));

    match args.command.unwrap_or(Command::Show { json: false }) {
        Command::Show { json: true } => {
            let text = serde_json::to_string_pretty(&session.snapshot())
                .map_err(|e| AppError::storage(format!("cannot render snapshot: {e}")))?;
            println!("{text}");
        }
        Command::Show { json: false } => print_sheet(&session.snapshot()),
        Command::New => {
            session.new_game();
            println!("New game started.");
        }
        Command::AddPlayer { name } => {
            let player = session.add_player(&name)?;
            println!("Added {} ({}).", player.name, player.id);
            print_sheet(&session.snapshot());
        }
        Command::RemovePlayer { player } => match session.remove_player(&player)? {
            Some(removed) => println!("Removed {}.", removed.name),
            None => println!("No player named '{player}'."),
        },
        Command::Mode { mode } => {
            let mode = DealingMode::from(mode);
            session.set_mode(mode);
            println!("Mode: {}", mode.label());
        }
        Command::MaxHand { value } => {
            let max = session.set_max_hand(value);
            println!("Max hand: {max}");
        }
        Command::Hand { value } => match session.set_manual_hand(value) {
            Some(hand) => println!("Manual hand size: {hand}"),
            None => println!("Manual hand size cleared."),
        },
        Command::Input {
            player,
            bid,
            won,
            clear,
        } => {
            if clear {
                session.clear_input(&player)?;
            } else {
                session.set_input(&player, bid, won)?;
            }
            print_sheet(&session.snapshot());
        }
        Command::Save => {
            let round = session.save_round()?;
            println!(
                "Saved round {} (hand {}). Undo with: undo {}",
                round.index, round.hand_size, round.id
            );
            print_sheet(&session.snapshot());
        }
        Command::Undo { round_id } => {
            let removed = match round_id {
                Some(id) => session.undo_round(&id),
                None => session.undo_last_saved(),
            };
            match removed {
                Some(round) => println!("Removed round {}.", round.index),
                None => println!("Nothing to undo."),
            }
        }
        Command::History => {
            let snap = session.snapshot();
            if snap.history.is_empty() {
                println!("No rounds yet.");
            }
            for row in &snap.history {
                print_history_row(row);
            }
        }
        Command::Export { out } => {
            let text = session.export_json()?;
            match out {
                Some(path) => {
                    std::fs::write(&path, text)?;
                    println!("Exported to {}.", path.display());
                }
                None => println!("{text}"),
            }
        }
        Command::Import { file } => {
            let text = if file == "-" {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            } else {
                std::fs::read_to_string(&file)?
            };
            session.import_json(&text)?;
            println!("Imported.");
            print_sheet(&session.snapshot());
        }
    }
    Ok(())
}

fn print_sheet(snap: &SessionSnapshot) {
    let hand = snap
        .hand_size
        .map(|h| h.to_string())
        .unwrap_or_else(|| "-".to_string());
    let planned = snap
        .planned_rounds
        .map(|n| format!(" of {n}"))
        .unwrap_or_default();
    println!(
        "Round {}{planned} | Hand {hand} | {} | Max {}",
        snap.round_no,
        snap.mode.label(),
        snap.max_hand
    );
    if let Some(leader) = &snap.leader {
        println!("Leader: {} ({})", leader.name, leader.total);
    }
    for s in &snap.standings {
        let preview = match s.preview {
            ScorePreview::Incomplete => String::new(),
            ScorePreview::OutOfRange => "  (out of range)".to_string(),
            ScorePreview::Score(delta) => format!("  ({delta:+})"),
        };
        println!("  #{} {:<16} {:>6}{preview}", s.rank, s.name, s.total);
    }
    if snap.standings.is_empty() {
        println!("  No players yet.");
    }
}

fn print_history_row(row: &HistoryRow) {
    println!(
        "Round {} ({}, hand {}) [{}]",
        row.index,
        row.mode.label(),
        row.hand_size,
        row.round_id
    );
    for line in &row.lines {
        match (line.entry, line.score) {
            (Some(e), Some(score)) => {
                println!("  {:<16} {}/{} {score:+}", line.name, e.bid, e.won)
            }
            _ => println!("  {:<16} -", line.name),
        }
    }
}
