use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{ArgAction, Parser, ValueEnum};

use noughts::config::{load_config_from_json, MatchConfig};
use noughts::render::{DIFFICULTY_MENU, INSTRUCTIONS};
use noughts::{Board, Difficulty, Game, MoveSelector, Player, Position};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SideOpt {
    X,
    O,
    /// Computer plays both sides
    None,
}

#[derive(Debug, Parser)]
#[command(name = "play", about = "Play noughts and crosses against the computer")]
struct Args {
    /// JSON match config; flags below override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Difficulty: easy|medium|hard|impossible or 1-4 (asked interactively when omitted)
    #[arg(long, value_parser = parse_difficulty)]
    difficulty: Option<Difficulty>,

    /// Player who places the first mark
    #[arg(long, value_enum)]
    first: Option<SideOpt>,

    /// Side you play
    #[arg(long, value_enum)]
    human: Option<SideOpt>,

    /// Seed for the computer's moves
    #[arg(long)]
    seed: Option<u64>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
    s.parse::<Difficulty>().map_err(|e| e.to_string())
}

fn side(opt: SideOpt) -> Option<Player> {
    match opt {
        SideOpt::X => Some(Player::X),
        SideOpt::O => Some(Player::O),
        SideOpt::None => None,
    }
}

/// Read one trimmed line after a `>` prompt; `None` on end of input.
fn prompt_line(input: &mut impl BufRead) -> anyhow::Result<Option<String>> {
    print!(">");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt_difficulty(input: &mut impl BufRead) -> anyhow::Result<Difficulty> {
    println!("\n{DIFFICULTY_MENU}");
    loop {
        let Some(line) = prompt_line(input)? else {
            bail!("input closed before a difficulty was chosen");
        };
        match line.parse::<Difficulty>() {
            Ok(d) => return Ok(d),
            Err(_) => println!("{line} is invalid. Please try again."),
        }
    }
}

fn prompt_position(input: &mut impl BufRead, board: &Board, player: Player) -> anyhow::Result<Position> {
    println!("Player {player}'s turn:");
    loop {
        let Some(line) = prompt_line(input)? else {
            bail!("input closed during player {player}'s turn");
        };
        match line.parse::<Position>() {
            Ok(pos) if board.is_empty(pos) => return Ok(pos),
            Ok(pos) => println!("{pos} is already taken. Please try again."),
            Err(_) => println!("{line} is not a valid position. Please try again."),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    noughts::logging::init(args.verbose);

    let mut cfg = match &args.config {
        Some(path) => load_config_from_json(path)
            .with_context(|| format!("loading match config {}", path.display()))?,
        None => MatchConfig::default(),
    };
    if let Some(first) = args.first {
        cfg.first = side(first).context("--first must be x or o")?;
    }
    if let Some(human) = args.human {
        cfg.human = side(human);
    }
    if args.seed.is_some() {
        cfg.seed = args.seed;
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("{INSTRUCTIONS}");
    cfg.difficulty = match args.difficulty {
        Some(d) => d,
        None if cfg.human.is_some() => prompt_difficulty(&mut input)?,
        None => cfg.difficulty,
    };
    tracing::info!(?cfg, "starting match");

    let mut selector = match cfg.seed {
        Some(seed) => MoveSelector::seeded(seed),
        None => MoveSelector::from_entropy(),
    };

    let mut game = Game::new(cfg.first);
    while !game.is_over() {
        print!("{}", game.board());
        let mover = game.turn();
        let pos = if cfg.human == Some(mover) {
            prompt_position(&mut input, game.board(), mover)?
        } else {
            let pos = selector.select(game.board(), cfg.difficulty)?;
            println!("Player {mover} plays {pos}");
            pos
        };
        game.play(pos)?;
    }

    print!("{}", game.board());
    println!("{}", game.status());
    Ok(())
}
