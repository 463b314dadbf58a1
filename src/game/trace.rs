use crate::*;

/// One completed shot.
///
/// `odds` is what the shooter faced before pulling the trigger; the health
/// values are the state after the charge was applied.
#[derive(Debug, Clone, Copy, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Turn {
    pub actor: Actor,
    pub action: Action,
    pub charge: Charge,
    pub odds: Odds,
    pub player: Health,
    pub dealer: Health,
}

impl Turn {
    /// The actor the barrel pointed at.
    pub fn target(&self) -> Actor {
        match self.action {
            Action::Myself => self.actor,
            Action::Opponent => self.actor.opponent(),
        }
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:<8}{:<16}{:<3}{:<14}{:>3}{:>4}",
            self.actor.to_string(),
            self.action.to_string(),
            self.charge.to_string(),
            self.odds.to_string(),
            self.player,
            self.dealer
        )
    }
}

/// Ordered, append-only record of every shot in one game.
#[derive(Debug, Clone, PartialEq, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Trace(Vec<Turn>);

impl Trace {
    pub fn push(&mut self, turn: Turn) {
        self.0.push(turn);
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn turns(&self) -> &[Turn] {
        &self.0
    }
    /// Per-turn draw probabilities, the input of [`Trend`].
    pub fn odds(&self) -> Vec<Odds> {
        self.0.iter().map(|turn| turn.odds).collect()
    }
}

impl From<Trace> for Vec<Turn> {
    fn from(trace: Trace) -> Self {
        trace.0
    }
}

impl std::fmt::Display for Trace {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, turn) in self.0.iter().enumerate() {
            writeln!(f, "{:>4} {}", i, turn)?;
        }
        Ok(())
    }
}
