use clap::{ArgAction, Parser, ValueEnum};
use serde::Serialize;

use noughts::solver::move_values;
use noughts::{actions, outcome, search_root, whose_turn, Board, Outcome, Player, Position};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FirstOpt {
    X,
    O,
}

impl From<FirstOpt> for Player {
    fn from(opt: FirstOpt) -> Self {
        match opt {
            FirstOpt::X => Player::X,
            FirstOpt::O => Player::O,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "query", about = "Evaluate a noughts and crosses position")]
struct Args {
    /// Board layout: 9 row-major symbols, X, O or '.' for empty (e.g. "X.O.X....")
    #[arg(long, default_value = ".........")]
    board: String,

    /// Player who placed the first mark
    #[arg(long, value_enum, default_value_t = FirstOpt::X)]
    first: FirstOpt,

    /// Also report the minimax value of every legal move
    #[arg(long)]
    all_moves: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize)]
struct MoveOut {
    cell: String,
    column: u8,
    row: u8,
}

impl From<Position> for MoveOut {
    fn from(pos: Position) -> Self {
        Self {
            cell: pos.to_string(),
            column: pos.column(),
            row: pos.row(),
        }
    }
}

#[derive(Serialize)]
struct MoveValueOut {
    #[serde(flatten)]
    mv: MoveOut,
    value: i32,
}

#[derive(Serialize)]
struct QueryOut {
    layout: String,
    turn: Player,
    outcome_x: Outcome,
    outcome_o: Outcome,
    actions: Vec<String>,
    best_move: Option<MoveOut>,
    value: Option<i32>,
    nodes: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    move_values: Option<Vec<MoveValueOut>>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    noughts::logging::init(args.verbose);

    let board = Board::from_layout(args.first.into(), &args.board)?;
    let outcome_x = outcome(&board, Player::X);

    let mut out = QueryOut {
        layout: noughts::render::layout(&board),
        turn: whose_turn(&board),
        outcome_x,
        outcome_o: outcome(&board, Player::O),
        actions: actions(&board).iter().map(ToString::to_string).collect(),
        best_move: None,
        value: None,
        nodes: 0,
        move_values: None,
    };

    if !outcome_x.is_terminal() {
        let res = search_root(&board)?;
        tracing::info!(best_move = %res.best_move, value = res.value, nodes = res.nodes, "searched");
        out.best_move = Some(res.best_move.into());
        out.value = Some(res.value);
        out.nodes = res.nodes;

        if args.all_moves {
            out.move_values = Some(
                move_values(&board)?
                    .into_iter()
                    .map(|(pos, value)| MoveValueOut {
                        mv: pos.into(),
                        value,
                    })
                    .collect(),
            );
        }
    }

    println!("{}", serde_json::to_string(&out)?);
    Ok(())
}
