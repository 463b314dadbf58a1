use super::batch::batch;
use crate::*;
use anyhow::Context;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Cumulative win rates after the first `round` games.
#[derive(Debug, Clone, Copy, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Checkpoint {
    pub round: usize,
    pub player: Probability,
    pub dealer: Probability,
}

/// Outcome statistics estimated by sampling.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Sampled {
    /// Base seed; round `i` plays with `seed + i`.
    pub seed: u64,
    pub rounds: usize,
    /// Charges per magazine after clamping.
    pub loadout: Loadout,
    pub counts: Counts,
    pub rates: Rates,
    pub lengths: Lengths,
    /// Mean odds per turn index. Empty unless tracing was enabled.
    pub trend: Vec<Option<Odds>>,
    /// Win rates every [`CONVERGENCE_INTERVAL`] rounds.
    pub convergence: Vec<Checkpoint>,
}

impl std::fmt::Display for Sampled {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{:<16}{}", "seed", self.seed)?;
        writeln!(f, "{:<16}{}", "rounds", self.rounds)?;
        writeln!(f, "{:<16}{}", "loadout", self.loadout)?;
        writeln!(
            f,
            "{:<16}player {} dealer {} draw {}",
            "counts", self.counts.player, self.counts.dealer, self.counts.draw
        )?;
        writeln!(f, "{:<16}{}", "rates", self.rates)?;
        write!(f, "{:<16}{:.2}", "mean length", self.lengths.mean())
    }
}

/// Repeated independent games with random reloads.
///
/// Each round draws from its own stream seeded off the run's base seed, so
/// a run is reproducible from the seed alone regardless of how rounds are
/// spread across workers.
pub struct MonteCarlo<'a> {
    config: &'a Config,
    player: &'a dyn Strategy,
    dealer: &'a dyn Strategy,
}

impl<'a> MonteCarlo<'a> {
    /// Plays the personas named in `config`.
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            player: &config.player,
            dealer: &config.dealer,
        }
    }
    /// Plays arbitrary strategies under the table rules of `config`.
    pub fn with(config: &'a Config, player: &'a dyn Strategy, dealer: &'a dyn Strategy) -> Self {
        Self {
            config,
            player,
            dealer,
        }
    }

    pub fn run(&self) -> anyhow::Result<Sampled> {
        self.config.validate()?;
        let rounds = self.config.rounds;
        let ceiling = self.config.max_charges;
        let seed = self.config.seed();
        let loadout = self.config.loadout();
        if loadout.diverges(ceiling) {
            log::warn!(
                "requested loadout {} clamped to {}",
                loadout,
                loadout.clamp(ceiling)
            );
        }
        log::info!(
            "sampling {} games, {} vs {}, seed {}",
            rounds,
            self.player.name(),
            self.dealer.name(),
            seed
        );
        let source = Source::reload(loadout, ceiling);
        let simulator = self.config.simulator(self.player, self.dealer);
        let play = |round: usize| -> anyhow::Result<Played> {
            let ref mut rng = SmallRng::seed_from_u64(seed.wrapping_add(round as u64));
            simulator
                .simulate(&source, None, rng)
                .with_context(|| format!("round {} (seed {})", round, seed))
        };
        let mut tally = Tally::default();
        let mut convergence = Vec::with_capacity(rounds / CONVERGENCE_INTERVAL);
        for start in (0..rounds).step_by(BATCH_SIZE) {
            let end = rounds.min(start + BATCH_SIZE);
            for played in batch((start..end).collect(), &play)? {
                tally.absorb(&played);
                if tally.games() % CONVERGENCE_INTERVAL == 0 {
                    let rates = tally.rates();
                    convergence.push(Checkpoint {
                        round: tally.games(),
                        player: rates.player,
                        dealer: rates.dealer,
                    });
                }
            }
            log::debug!("sampled {}/{} games", end, rounds);
        }
        let rates = tally.rates();
        debug_assert!((rates.sum() - 100.).abs() < RATE_TOLERANCE);
        log::info!("{}", rates);
        let (counts, lengths, trend) = <(Counts, Lengths, Trend)>::from(tally);
        Ok(Sampled {
            seed,
            rounds,
            loadout: loadout.clamp(ceiling),
            counts,
            rates,
            lengths,
            trend: trend.points(),
            convergence,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Four standard errors of a percent rate `p` estimated from `n` games.
    fn band(p: Probability, n: usize) -> Probability {
        4. * (p * (1. - p) / n as Probability).sqrt() * 100.
    }

    fn config() -> Config {
        Config {
            rounds: 2_000,
            seed: Some(7),
            ..Config::default()
        }
    }

    #[test]
    fn rates_sum_to_hundred() {
        for persona in Persona::all() {
            let config = Config {
                player: persona,
                dealer: Persona::Dynamic,
                ..config()
            };
            let sampled = MonteCarlo::new(&config).run().unwrap();
            assert!((sampled.rates.sum() - 100.).abs() < RATE_TOLERANCE);
            assert!(sampled.counts.total() == config.rounds);
            assert!(sampled.lengths.games() == config.rounds);
        }
    }

    #[test]
    fn same_seed_same_report() {
        let config = Config {
            player: Persona::Random,
            dealer: Persona::Dynamic,
            opener: Opener::Coin,
            ..config()
        };
        let a = MonteCarlo::new(&config).run().unwrap();
        let b = MonteCarlo::new(&config).run().unwrap();
        assert!(a == b);
    }

    #[test]
    fn reloads_never_draw() {
        let config = Config {
            live: 1,
            blank: 0,
            ..config()
        };
        let sampled = MonteCarlo::new(&config).run().unwrap();
        assert!(sampled.counts.draw == 0);
        assert!(sampled.loadout == Loadout::new(1, 1));
    }

    #[test]
    fn opener_sets_the_edge() {
        // the first live charge decides a 1/1 game, and it is fired by the
        // opener with probability 2/3 for two live and two blank
        let config = Config {
            rounds: 20_000,
            live: 2,
            blank: 2,
            player_health: 1,
            dealer_health: 1,
            ..config()
        };
        let tolerance = band(2. / 3., config.rounds);
        let sampled = MonteCarlo::new(&config).run().unwrap();
        assert!((sampled.rates.player - 200. / 3.).abs() < tolerance);
        let config = Config {
            opener: Opener::Dealer,
            ..config
        };
        let sampled = MonteCarlo::new(&config).run().unwrap();
        assert!((sampled.rates.dealer - 200. / 3.).abs() < tolerance);
    }

    #[test]
    fn coin_opener_is_fair() {
        let config = Config {
            rounds: 20_000,
            opener: Opener::Coin,
            ..config()
        };
        let sampled = MonteCarlo::new(&config).run().unwrap();
        assert!((sampled.rates.player - 50.).abs() < band(0.5, config.rounds));
    }

    #[test]
    fn convergence_ends_at_final_rates() {
        let config = Config {
            rounds: 1_005,
            ..config()
        };
        let sampled = MonteCarlo::new(&config).run().unwrap();
        let last = sampled.convergence.last().unwrap();
        assert!(sampled.convergence.len() == 100);
        assert!(sampled.convergence[0].round == CONVERGENCE_INTERVAL);
        assert!(last.round == 1_000);
        assert!(last.player + last.dealer <= 100. + RATE_TOLERANCE);
    }

    #[test]
    fn trend_starts_at_loadout_odds() {
        let sampled = MonteCarlo::new(&config()).run().unwrap();
        assert!(sampled.trend[0] == Some(Odds::new(0.5, 0.5)));
        assert!(sampled.trend.iter().all(|point| point.is_some()));
        let config = Config {
            trend: false,
            ..config()
        };
        let sampled = MonteCarlo::new(&config).run().unwrap();
        assert!(sampled.trend.is_empty());
    }

    #[test]
    fn invalid_config_plays_nothing() {
        let config = Config {
            rounds: 0,
            ..config()
        };
        assert!(MonteCarlo::new(&config).run().is_err());
    }

    #[test]
    fn custom_strategies() {
        struct Coward;
        impl Strategy for Coward {
            fn decide(&self, _: &View, _: &Params, _: &mut SmallRng) -> anyhow::Result<Action> {
                Ok(Action::Myself)
            }
            fn name(&self) -> &str {
                "coward"
            }
        }
        let config = config();
        let sampled = MonteCarlo::with(&config, &Coward, &Coward).run().unwrap();
        assert!((sampled.rates.sum() - 100.).abs() < RATE_TOLERANCE);
        assert!(sampled.counts.draw == 0);
    }
}
