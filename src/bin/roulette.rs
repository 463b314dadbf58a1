//! Roulette Binary
//!
//! Runs Monte Carlo or exhaustive analysis of a strategy pairing and prints
//! a summary table or JSON.
//!
//! Commands: sample, exhaust, strategies

use buckshot::*;
use clap::Parser;
use colored::Colorize;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
enum Command {
    #[command(about = "Estimate outcome rates by random sampling", alias = "mc")]
    Sample {
        #[command(flatten)]
        table: Table,
    },
    #[command(about = "Compute exact outcome rates over every ordering", alias = "ex")]
    Exhaust {
        #[command(flatten)]
        table: Table,
        /// Also enumerate every assignment of shooters to draw positions
        #[arg(long)]
        schedules: bool,
        /// Print the number of games and exit
        #[arg(long)]
        count: bool,
    },
    #[command(about = "List the built-in strategies", alias = "ls")]
    Strategies,
}

#[derive(clap::Args)]
struct Table {
    /// JSON configuration; the flags below override its fields
    #[arg(long)]
    config: Option<std::path::PathBuf>,
    #[arg(short = 'n', long)]
    rounds: Option<usize>,
    #[arg(long)]
    live: Option<usize>,
    #[arg(long)]
    blank: Option<usize>,
    #[arg(long)]
    player_health: Option<Health>,
    #[arg(long)]
    dealer_health: Option<Health>,
    #[arg(long)]
    player: Option<String>,
    #[arg(long)]
    dealer: Option<String>,
    /// Strategy parameter, e.g. threshold=0.6 (repeatable)
    #[arg(long = "param", value_parser = parameter)]
    params: Vec<(String, Probability)>,
    /// retain or pass
    #[arg(long)]
    retention: Option<String>,
    /// player, dealer or coin
    #[arg(long)]
    opener: Option<String>,
    #[arg(long)]
    max_charges: Option<usize>,
    #[arg(long)]
    max_turns: Option<usize>,
    #[arg(long)]
    seed: Option<u64>,
    /// Skip the per-turn probability trend
    #[arg(long)]
    no_trend: bool,
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

impl Table {
    fn config(&self) -> anyhow::Result<Config> {
        use anyhow::Context;
        let mut config = match self.config {
            None => Config::default(),
            Some(ref path) => serde_json::from_reader(
                std::fs::File::open(path).with_context(|| format!("open {}", path.display()))?,
            )
            .with_context(|| format!("parse {}", path.display()))?,
        };
        if let Some(rounds) = self.rounds {
            config.rounds = rounds;
        }
        if let Some(live) = self.live {
            config.live = live;
        }
        if let Some(blank) = self.blank {
            config.blank = blank;
        }
        if let Some(health) = self.player_health {
            config.player_health = health;
        }
        if let Some(health) = self.dealer_health {
            config.dealer_health = health;
        }
        if let Some(ref player) = self.player {
            config.player = Persona::try_from(player.as_str())?;
        }
        if let Some(ref dealer) = self.dealer {
            config.dealer = Persona::try_from(dealer.as_str())?;
        }
        for (key, value) in self.params.iter() {
            config.params.set(key, *value)?;
        }
        if let Some(ref retention) = self.retention {
            config.retention = Retention::try_from(retention.as_str())?;
        }
        if let Some(ref opener) = self.opener {
            config.opener = Opener::try_from(opener.as_str())?;
        }
        if let Some(max) = self.max_charges {
            config.max_charges = max;
        }
        if let Some(max) = self.max_turns {
            config.max_turns = max;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if self.no_trend {
            config.trend = false;
        }
        config.validate()?;
        Ok(config)
    }
}

fn parameter(s: &str) -> Result<(String, Probability), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got {:?}", s))?;
    let value = value
        .trim()
        .parse::<Probability>()
        .map_err(|e| format!("{}: {}", key, e))?;
    Ok((key.trim().to_string(), value))
}

fn header(title: &str) {
    println!("{}", format!("{:-^48}", format!(" {} ", title)).bold());
}

fn trend(points: &[Option<Odds>]) {
    if points.is_empty() {
        return;
    }
    header("trend");
    for (t, point) in points.iter().enumerate() {
        match point {
            Some(odds) => println!("{:>4} {}", t, odds),
            None => println!("{:>4} {}", t, "undefined".dimmed()),
        }
    }
}

fn main() -> anyhow::Result<()> {
    log();
    match Command::parse() {
        Command::Strategies => {
            for persona in Persona::all() {
                println!("{:<16}{}", persona.to_string().bold(), persona.description());
            }
        }
        Command::Sample { table } => {
            let config = table.config()?;
            let sampled = MonteCarlo::new(&config).run()?;
            if table.json {
                println!("{}", serde_json::to_string_pretty(&sampled)?);
            } else {
                header("config");
                println!("{}", config);
                header("monte carlo");
                println!("{}", sampled);
                header("game length");
                print!("{}", sampled.lengths);
                header("convergence");
                for checkpoint in sampled.convergence.iter().step_by(sampled.convergence.len().div_ceil(10).max(1)) {
                    println!(
                        "{:>8} {:>8.2}% {:>8.2}%",
                        checkpoint.round, checkpoint.player, checkpoint.dealer
                    );
                }
                trend(&sampled.trend);
            }
        }
        Command::Exhaust {
            table,
            schedules,
            count,
        } => {
            let mut config = table.config()?;
            config.schedules = schedules;
            let exhaustive = Exhaustive::new(&config);
            if count {
                println!("{}", exhaustive.cardinality());
                return Ok(());
            }
            let enumerated = exhaustive.run()?;
            if table.json {
                println!("{}", serde_json::to_string_pretty(&enumerated)?);
            } else {
                header("config");
                println!("{}", config);
                header("exhaustive");
                println!("{}", enumerated);
                header("game length");
                print!("{}", enumerated.lengths);
                trend(&enumerated.trend);
            }
        }
    }
    Ok(())
}
