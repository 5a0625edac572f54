//! Countdown Binary
//!
//! Deals one numbers round and prints it to the terminal.
//!
//! Options: --big, --choice, --interactive, --seed, --low, --high, --frames, --json

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use countdown::*;

#[derive(Parser)]
#[command(author, version, about = "Deal a Countdown numbers round", long_about = None)]
struct Args {
    #[arg(long, allow_negative_numbers = true, conflicts_with = "choice", help = "Big tiles in the hand (0-4)")]
    big: Option<isize>,
    #[arg(long, help = "Big tile selection, e.g. \"4 Big\" or \"All small\"")]
    choice: Option<Choice>,
    #[arg(long, short, conflicts_with_all = ["big", "choice"], help = "Pick the big tile count from a menu")]
    interactive: bool,
    #[arg(long, help = "Seed for a reproducible round")]
    seed: Option<u64>,
    #[arg(long, default_value_t = TARGET_LOW, allow_negative_numbers = true)]
    low: Target,
    #[arg(long, default_value_t = TARGET_HIGH, allow_negative_numbers = true)]
    high: Target,
    #[arg(long, default_value_t = 0, help = "Provisional targets to show before the final one")]
    frames: usize,
    #[arg(long, help = "Print the round as JSON")]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if !args.json {
        log()?;
    }
    let n_big = match (args.interactive, args.big, args.choice) {
        (true, _, _) => prompt()?.n_big(),
        (false, Some(n), _) => n,
        (false, None, Some(choice)) => choice.n_big(),
        (false, None, None) => Choice::default().n_big(),
    };
    let mut selector = match args.seed {
        Some(seed) => Selector::seeded(seed),
        None => Selector::default(),
    };
    let hand = selector
        .draw_hand(n_big)
        .with_context(|| format!("dealing a hand with {} big tiles", n_big))?;
    let target = selector
        .reveal(args.low, args.high, args.frames.max(1))
        .context("revealing the target")?
        .inspect(|frame| match args.json || args.frames == 0 {
            true => {}
            false => println!("{}", frame.to_string().dimmed()),
        })
        .last()
        .context("reveal produced no target")?;
    let round = Round::new(hand, target);
    log::info!("dealt {}", round);
    match args.json {
        true => println!("{}", serde_json::to_string(&round)?),
        false => show(&round),
    }
    Ok(())
}

fn prompt() -> anyhow::Result<Choice> {
    let labels = Choice::all()
        .iter()
        .map(Choice::label)
        .collect::<Vec<&str>>();
    let default = Choice::all()
        .iter()
        .position(|c| *c == Choice::default())
        .unwrap_or(0);
    let selection = dialoguer::Select::new()
        .with_prompt("How many big ones?")
        .report(false)
        .items(labels.as_slice())
        .default(default)
        .interact()
        .context("reading big tile selection")?;
    Ok(Choice::all()[selection])
}

fn show(round: &Round) {
    let tiles = round
        .hand()
        .tiles()
        .iter()
        .map(|tile| match tile.is_big() {
            true => format!("[{:>3}]", tile).bold().yellow().to_string(),
            false => format!("[{:>3}]", tile).bold().to_string(),
        })
        .collect::<Vec<String>>()
        .join(" ");
    println!("{}", tiles);
    println!("{}", format!("{:03}", round.target()).bold().green());
}
