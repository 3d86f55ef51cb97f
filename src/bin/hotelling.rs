//! Hotelling Binary
//!
//! Solves a sequential location game on [0,1] and prints each player's
//! equilibrium position and win probability.
//!
//! Options: --players, --resolution, --first, --no-mirror, --sweep, --seed,
//! --first-tie, --json

use clap::Parser;
use colored::Colorize;
use hotelling::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = DEFAULT_PLAYERS, help = "Number of players")]
    players: usize,
    #[arg(short = 'n', long, default_value_t = DEFAULT_RESOLUTION, help = "Grid resolution N")]
    resolution: usize,
    #[arg(long, help = "Fix the first player's position (must lie on the grid)")]
    first: Option<Coordinate>,
    #[arg(long, help = "Let an unpinned first player range over all of [0,1]")]
    no_mirror: bool,
    #[arg(long, value_delimiter = ',', help = "Solve at several resolutions, e.g. 6,12,24")]
    sweep: Vec<usize>,
    #[arg(long, help = "Seed for random tie-breaks")]
    seed: Option<u64>,
    #[arg(long, conflicts_with = "seed", help = "Break ties by lowest position")]
    first_tie: bool,
    #[arg(long, default_value_t = DEFAULT_PRECISION, help = "Decimal places")]
    precision: usize,
    #[arg(long, help = "Print JSON instead of text")]
    json: bool,
    #[arg(short, long, action = clap::ArgAction::Count, help = "More logging")]
    verbose: u8,
    #[arg(long, help = "Also write debug logs to this file")]
    log_file: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> Config {
        let config = Config::new(self.players, self.resolution)
            .mirrored(!self.no_mirror)
            .precision(self.precision);
        match self.first {
            Some(x) => config.pinned(x),
            None => config,
        }
    }
    fn level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
    fn tiebreak(&self) -> Box<dyn TieBreak> {
        match (self.first_tie, self.seed) {
            (true, _) => Box::new(First),
            (false, Some(seed)) => Box::new(Uniform::seeded(seed)),
            (false, None) => Box::new(Uniform::entropy()),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    hotelling::log(args.level(), args.log_file.as_deref())?;
    let config = args.config();
    let reports = match args.sweep.as_slice() {
        [] => vec![Hotelling::equilibrium(&config, args.tiebreak())?],
        resolutions => Hotelling::sweep(&config, resolutions, args.tiebreak())?,
    };
    if args.json {
        let json = match reports.as_slice() {
            [report] => serde_json::to_string_pretty(report)?,
            reports => serde_json::to_string_pretty(reports)?,
        };
        println!("{}", json);
        return Ok(());
    }
    for report in &reports {
        if reports.len() > 1 {
            println!("{}", format!("N = {}", report.resolution).bold());
        }
        print!("{}", report);
    }
    Ok(())
}
