use std::env;
use std::process;
use std::time::Duration;

use move_selector::board::{Game, STARTPOS_FEN};
use move_selector::timer::WallClock;
use move_selector::{EngineOptions, SearchContext};

const USAGE: &str =
    "usage: move_selector [--deadline SECS] [--seed N] [--max-depth N] [--option NAME=VALUE]... [FEN]";

fn parse_args(args: &[String]) -> Result<(EngineOptions, String), String> {
    let mut options = EngineOptions::default();
    let mut fen_parts: Vec<&str> = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let mut value_for = |flag: &str| {
            iter.next()
                .cloned()
                .ok_or_else(|| format!("missing value for {flag}"))
        };
        match arg.as_str() {
            "-h" | "--help" => return Err(USAGE.to_string()),
            "--deadline" => {
                let value = value_for("--deadline")?;
                options
                    .apply_option("deadline", &value)
                    .map_err(|err| err.to_string())?;
            }
            "--seed" => {
                let value = value_for("--seed")?;
                options
                    .apply_option("seed", &value)
                    .map_err(|err| err.to_string())?;
            }
            "--max-depth" => {
                let value = value_for("--max-depth")?;
                options
                    .apply_option("max depth", &value)
                    .map_err(|err| err.to_string())?;
            }
            "--option" => {
                let value = value_for("--option")?;
                let (name, setting) = value
                    .split_once('=')
                    .ok_or_else(|| format!("expected NAME=VALUE, got '{value}'"))?;
                options
                    .apply_option(name, setting)
                    .map_err(|err| err.to_string())?;
            }
            flag if flag.starts_with("--") => return Err(format!("unknown flag {flag}\n{USAGE}")),
            part => fen_parts.push(part),
        }
    }

    let fen = if fen_parts.is_empty() {
        STARTPOS_FEN.to_string()
    } else {
        fen_parts.join(" ")
    };
    Ok((options, fen))
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (options, fen) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("{message}");
            process::exit(2);
        }
    };

    let game = match Game::from_fen(&fen) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    let deadline: Duration = options.deadline;
    let mut context = SearchContext::new(options);
    let report = context.think(&game, deadline, &WallClock::start());

    match report.best_move {
        Some(mv) => println!("{mv}"),
        None => println!("none"),
    }
    println!(
        "depth {} value {} nodes {} cache hits {} time {}ms",
        report.depth,
        report.value,
        report.nodes,
        report.cache_hits,
        report.elapsed.as_millis()
    );
}
