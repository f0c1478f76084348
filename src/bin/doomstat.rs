use std::fs;
use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use doomstat::prelude::*;
use log::debug;

#[derive(Parser, Debug)]
#[command(name = "doomstat", about = "Odds of a dice pool with plot dice and doom")]
struct Args {
    /// Dice such as `d10 d12 pd6`, optionally preceded by `~stat`.
    /// Reads commands from stdin, one per line, when empty.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    dice: Vec<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// How doom is generated
    #[arg(long, value_enum, default_value_t = DoomArg::PlotFace)]
    doom: DoomArg,

    #[arg(long, value_enum, default_value_t = StrategyArg::Enumerate)]
    strategy: StrategyArg,

    /// Largest number of dice in one pool
    #[arg(long, default_value_t = 6)]
    max_dice: usize,

    /// Largest number of outcomes to compute
    #[arg(long, default_value_t = 5_000_000)]
    max_outcomes: u64,

    /// File with one title line per row
    #[arg(long)]
    titles: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DoomArg {
    PlotFace,
    Opportunities,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyArg {
    Enumerate,
    Convolve,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let doom_rule: Box<dyn DoomRule> = match args.doom {
        DoomArg::PlotFace => Box::new(PlotFace),
        DoomArg::Opportunities => Box::new(Opportunities),
    };
    let strategy = match args.strategy {
        StrategyArg::Enumerate => Strategy::Enumerate,
        StrategyArg::Convolve => Strategy::Convolve,
    };
    let engine = Engine::builder()
        .max_dice(args.max_dice)
        .max_outcomes(args.max_outcomes)
        .strategy(strategy)
        .doom_rule(doom_rule)
        .build();

    let titles = match &args.titles {
        Some(path) => Titles::parse(
            &fs::read_to_string(path)
                .with_context(|| format!("reading titles from {}", path.display()))?,
        ),
        None => Titles::default(),
    };

    if !args.dice.is_empty() {
        let line = args.dice.join(" ");
        let tokens = match StatCommand::parse(&line) {
            Some(cmd) => cmd.args,
            None => line.split_whitespace().collect(),
        };
        return answer(&engine, &tokens, &titles, args.json);
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        match StatCommand::parse(&line) {
            Some(cmd) => {
                if let Err(e) = answer(&engine, &cmd.args, &titles, args.json) {
                    eprintln!("{e:#}");
                }
            }
            None => debug!("not a statistics command: `{line}`"),
        }
    }
    Ok(())
}

fn answer(engine: &Engine, tokens: &[&str], titles: &Titles, json: bool) -> Result<()> {
    let stats = engine
        .stats(tokens)
        .with_context(|| format!("cannot read dice in `{}`", tokens.join(" ")))?;
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        stats.print(titles.pick(&mut rand::thread_rng()));
    }
    Ok(())
}
