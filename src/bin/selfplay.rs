use std::time::Instant;

use clap::{ArgAction, Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;

use noughts::{rng_for_game, simulate, Difficulty, GameRecord, Lineup, MoveSelector, Player};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FirstOpt {
    X,
    O,
    /// X starts even-numbered games, O odd-numbered ones
    Alternate,
}

#[derive(Debug, Parser)]
#[command(name = "selfplay", about = "Play computer-versus-computer games and summarise the results")]
struct Args {
    /// Number of games to play
    #[arg(long, default_value_t = 100)]
    games: u64,

    /// Base seed; game i uses a generator derived from (seed, i)
    #[arg(long, default_value_t = 0x00C0_FFEEu64)]
    seed: u64,

    /// Difficulty for X: easy|medium|hard|impossible or 1-4
    #[arg(long, default_value = "impossible", value_parser = parse_difficulty)]
    x: Difficulty,

    /// Difficulty for O: easy|medium|hard|impossible or 1-4
    #[arg(long, default_value = "impossible", value_parser = parse_difficulty)]
    o: Difficulty,

    /// Who places the first mark
    #[arg(long, value_enum, default_value_t = FirstOpt::Alternate)]
    first: FirstOpt,

    /// Hide the progress bar
    #[arg(long)]
    quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
    s.parse::<Difficulty>().map_err(|e| e.to_string())
}

#[derive(Debug, Default, Serialize)]
struct Summary {
    games: u64,
    seed: u64,
    x: Difficulty,
    o: Difficulty,
    x_wins: u64,
    o_wins: u64,
    draws: u64,
    first_mover_wins: u64,
    mean_plies: f64,
}

impl Summary {
    fn tally(&mut self, records: &[GameRecord]) {
        let mut plies = 0u64;
        for rec in records {
            match rec.winner {
                Some(Player::X) => self.x_wins += 1,
                Some(Player::O) => self.o_wins += 1,
                None => self.draws += 1,
            }
            if rec.winner == Some(rec.first) {
                self.first_mover_wins += 1;
            }
            plies += u64::from(rec.plies);
        }
        if !records.is_empty() {
            self.mean_plies = plies as f64 / records.len() as f64;
        }
    }
}

fn first_for(opt: FirstOpt, game_id: u64) -> Player {
    match opt {
        FirstOpt::X => Player::X,
        FirstOpt::O => Player::O,
        FirstOpt::Alternate if game_id % 2 == 0 => Player::X,
        FirstOpt::Alternate => Player::O,
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    noughts::logging::init(args.verbose);

    let lineup = Lineup {
        x: args.x,
        o: args.o,
    };

    let pb = if args.quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(args.games);
        pb.set_style(
            ProgressStyle::with_template("[selfplay] {bar:40} {pos}/{len} games ({elapsed})")?,
        );
        pb
    };

    let start = Instant::now();
    let records = (0..args.games)
        .into_par_iter()
        .map(|game_id| {
            let mut selector = MoveSelector::new(rng_for_game(args.seed, game_id));
            let rec = simulate(first_for(args.first, game_id), lineup, &mut selector);
            pb.inc(1);
            rec
        })
        .collect::<Result<Vec<_>, _>>()?;
    pb.finish_and_clear();
    tracing::info!(games = records.len(), elapsed_ms = start.elapsed().as_millis() as u64, "selfplay complete");

    let mut summary = Summary {
        games: args.games,
        seed: args.seed,
        x: args.x,
        o: args.o,
        ..Summary::default()
    };
    summary.tally(&records);

    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
