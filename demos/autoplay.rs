//! Generates a random equation and plays it to completion with a simple
//! strategy, printing every step.
//!
//! Run with:
//! ```bash
//! cargo run --example autoplay -- --variables 3 --constants 3 --seed 7
//! ```

use balance_rs::edit::{merge_terms, move_term};
use balance_rs::equation::Equation;
use balance_rs::generate::generate_with;
use balance_rs::types::{NodeId, Side};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(Parser)]
struct Args {
    /// Total number of variable terms across both sides.
    #[arg(long, default_value_t = 3)]
    variables: usize,
    /// Total number of constant terms across both sides.
    #[arg(long, default_value_t = 3)]
    constants: usize,
    /// Seed for a reproducible equation (random when omitted).
    #[arg(long)]
    seed: Option<u64>,
}

/// The first pair of same-kind leaves on `side`, if any.
fn same_kind_pair(equation: &Equation, side: Side) -> Option<(NodeId, NodeId)> {
    let leaves = equation.side(side).leaves();
    for (i, a) in leaves.iter().enumerate() {
        for b in &leaves[i + 1..] {
            if a.kind() == b.kind() {
                return Some((a.id(), b.id()));
            }
        }
    }
    None
}

/// A leaf on a multi-term side whose kind also appears on the other side.
/// Moving it across creates a mergeable pair there.
fn movable_leaf(equation: &Equation) -> Option<(NodeId, Side)> {
    for side in [Side::Left, Side::Right] {
        let here = equation.side(side).leaves();
        if here.len() < 2 {
            continue;
        }
        let there = equation.side(side.opposite()).leaves();
        for leaf in here {
            if there.iter().any(|other| other.kind() == leaf.kind()) {
                return Some((leaf.id(), side));
            }
        }
    }
    None
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random::<u64>);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    println!("seed = {}", seed);

    let mut equation = generate_with(&mut rng, args.variables, args.constants);
    println!("start:  {}", equation);

    let mut steps = 0;
    while !equation.is_solved() {
        let pair = [Side::Left, Side::Right]
            .into_iter()
            .find_map(|side| same_kind_pair(&equation, side).map(|pair| (side, pair)));

        if let Some((side, (a, b))) = pair {
            equation = merge_terms(&equation, a, b)?;
            steps += 1;
            println!("merge ({}):  {}", side, equation);
            continue;
        }

        let (id, side) = movable_leaf(&equation)
            .expect("an unsolved equation without mergeable pairs has a movable leaf");
        equation = move_term(&equation, id, side, side.opposite())?;
        steps += 1;
        println!("move ({} -> {}):  {}", side, side.opposite(), equation);
    }

    println!("solved in {} steps:  {}", steps, equation);
    Ok(())
}
