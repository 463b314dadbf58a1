use crate::*;
use anyhow::Context;

/// Everything needed to run a batch of games.
///
/// Every field has a default, so a partial document deserializes into a
/// complete configuration. Call [`validate`](Self::validate) before running;
/// both runners do so themselves.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Monte Carlo games to sample.
    pub rounds: usize,
    /// Live charges requested per magazine.
    pub live: usize,
    /// Blank charges requested per magazine.
    pub blank: usize,
    pub player_health: Health,
    pub dealer_health: Health,
    pub player: Persona,
    pub dealer: Persona,
    pub params: Params,
    pub retention: Retention,
    pub opener: Opener,
    /// Ceiling on charges per reload.
    pub max_charges: usize,
    /// Ceiling on shots per game.
    pub max_turns: usize,
    /// Base seed. Drawn from entropy and reported when absent.
    pub seed: Option<u64>,
    /// Record per-turn odds and average them into a trend.
    pub trend: bool,
    /// Also enumerate every assignment of shooters to draw positions.
    pub schedules: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rounds: ROUNDS,
            live: LIVE_CHARGES,
            blank: BLANK_CHARGES,
            player_health: PLAYER_HEALTH,
            dealer_health: DEALER_HEALTH,
            player: Persona::default(),
            dealer: Persona::default(),
            params: Params::default(),
            retention: Retention::default(),
            opener: Opener::default(),
            max_charges: MAX_CHARGES,
            max_turns: MAX_TURNS,
            seed: None,
            trend: true,
            schedules: false,
        }
    }
}

impl Config {
    /// Rejects configurations before any game is played.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.rounds >= 1, "rounds must be at least 1");
        anyhow::ensure!(self.live >= 1, "at least one live charge is required");
        anyhow::ensure!(self.player_health >= 1, "player health must be at least 1");
        anyhow::ensure!(self.dealer_health >= 1, "dealer health must be at least 1");
        anyhow::ensure!(
            self.max_charges >= MIN_CHARGES,
            "max_charges must be at least {}, got {}",
            MIN_CHARGES,
            self.max_charges
        );
        anyhow::ensure!(self.max_turns >= 1, "max_turns must be at least 1");
        self.params.validate().context("invalid strategy parameters")
    }
    /// Requested charges before clamping.
    pub fn loadout(&self) -> Loadout {
        Loadout::new(self.live, self.blank)
    }
    /// Table rules for a pair of strategies.
    pub fn simulator<'a>(&self, player: &'a dyn Strategy, dealer: &'a dyn Strategy) -> Simulator<'a> {
        Simulator::new(player, dealer)
            .params(self.params)
            .health(self.player_health, self.dealer_health)
            .retention(self.retention)
            .opener(self.opener)
            .ceiling(self.max_turns)
            .traced(self.trend)
    }
    /// The configured seed, or a fresh one from entropy.
    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{:<16}{} vs {}", "strategies", self.player, self.dealer)?;
        writeln!(f, "{:<16}{}/{}", "health", self.player_health, self.dealer_health)?;
        writeln!(f, "{:<16}{} (max {})", "loadout", self.loadout(), self.max_charges)?;
        writeln!(f, "{:<16}{}", "retention", self.retention)?;
        writeln!(f, "{:<16}{}", "opener", self.opener)?;
        write!(
            f,
            "{:<16}threshold {} risk {} caution {} bluff {}",
            "params",
            self.params.threshold,
            self.params.risk_tolerance,
            self.params.caution_level,
            self.params.bluff_factor
        )
    }
}
