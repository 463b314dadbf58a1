use super::batch::batch;
use crate::*;
use anyhow::Context;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Exact outcome statistics over every distinct ordering.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Enumerated {
    /// Base seed for the streams of stochastic strategies.
    pub seed: u64,
    pub loadout: Loadout,
    /// Distinct charge orderings.
    pub orderings: u128,
    /// Turn schedules played per ordering, 1 unless enumerated.
    pub schedules: u128,
    pub counts: Counts,
    pub rates: Rates,
    pub lengths: Lengths,
    /// Mean odds per turn index. Empty unless tracing was enabled.
    pub trend: Vec<Option<Odds>>,
}

impl Enumerated {
    pub fn games(&self) -> usize {
        self.counts.total()
    }
}

impl std::fmt::Display for Enumerated {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{:<16}{}", "loadout", self.loadout)?;
        writeln!(f, "{:<16}{}", "orderings", self.orderings)?;
        writeln!(f, "{:<16}{}", "schedules", self.schedules)?;
        writeln!(f, "{:<16}{}", "games", self.games())?;
        writeln!(
            f,
            "{:<16}player {} dealer {} draw {}",
            "counts", self.counts.player, self.counts.dealer, self.counts.draw
        )?;
        writeln!(f, "{:<16}{}", "rates", self.rates)?;
        write!(f, "{:<16}{:.2}", "mean length", self.lengths.mean())
    }
}

/// One fixed-magazine game per distinct ordering of the configured charges.
///
/// Each ordering is weighted equally. Every distinct arrangement of the
/// multiset is produced by the same number of raw shuffles, so the ordering
/// enumeration is exact for a single magazine. With schedules enabled, each
/// ordering is further played once per assignment of shooters to draw
/// positions, bypassing the retention rule.
///
/// The loadout is taken as requested: no reload clamp applies since the
/// magazine is never refilled. Running dry with both actors alive is a draw.
pub struct Exhaustive<'a> {
    config: &'a Config,
    player: &'a dyn Strategy,
    dealer: &'a dyn Strategy,
}

impl<'a> Exhaustive<'a> {
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

    /// Distinct orderings of the configured charges.
    pub fn orderings(&self) -> u128 {
        Arrangements::count(self.config.loadout())
    }
    /// Games played per ordering.
    pub fn schedules(&self) -> u128 {
        match self.config.schedules {
            true => Schedules::count(self.config.loadout().total()),
            false => 1,
        }
    }
    /// Games a run would play, saturating. Available before running so
    /// callers can bound the work.
    pub fn cardinality(&self) -> u128 {
        self.orderings().saturating_mul(self.schedules())
    }

    pub fn run(&self) -> anyhow::Result<Enumerated> {
        self.config.validate()?;
        let loadout = self.config.loadout();
        let positions = loadout.total();
        let seed = self.config.seed();
        let games = self.cardinality();
        if self.config.schedules {
            Schedules::new(positions).context("turn schedules are not enumerable")?;
        }
        if games > EXHAUSTIVE_WARN {
            log::warn!("enumerating {} games for loadout {}", games, loadout);
        }
        log::info!(
            "enumerating {} orderings x {} schedules, {} vs {}",
            self.orderings(),
            self.schedules(),
            self.player.name(),
            self.dealer.name()
        );
        let simulator = self.config.simulator(self.player, self.dealer);
        let schedules = self.config.schedules;
        let play = |(index, magazine): (usize, Magazine)| -> anyhow::Result<Tally> {
            let ref mut rng = SmallRng::seed_from_u64(seed.wrapping_add(index as u64));
            let source = Source::from(magazine);
            let mut tally = Tally::default();
            match schedules {
                false => tally.absorb(&simulator.simulate(&source, None, rng)?),
                true => {
                    for schedule in Schedules::new(positions)? {
                        tally.absorb(&simulator.simulate(&source, Some(&schedule), rng)?);
                    }
                }
            }
            Ok(tally)
        };
        let mut arrangements = Arrangements::from(loadout).enumerate();
        let mut tally = Tally::default();
        loop {
            let chunk = arrangements.by_ref().take(BATCH_SIZE).collect::<Vec<_>>();
            if chunk.is_empty() {
                break;
            }
            tally = batch(chunk, &play)?.into_iter().fold(tally, Tally::merge);
            log::debug!("enumerated {}/{} games", tally.games(), games);
        }
        let rates = tally.rates();
        debug_assert!((rates.sum() - 100.).abs() < RATE_TOLERANCE);
        log::info!("{}", rates);
        let (counts, lengths, trend) = <(Counts, Lengths, Trend)>::from(tally);
        Ok(Enumerated {
            seed,
            loadout,
            orderings: self.orderings(),
            schedules: self.schedules(),
            counts,
            rates,
            lengths,
            trend: trend.points(),
        })
    }
}
