use crate::*;

/// What the shooter knows when choosing a target.
///
/// Remaining live and blank counts of the magazine suffix plus both health
/// values, seen from the shooter's side. The charge order stays hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct View {
    live: usize,
    blank: usize,
    health: Health,
    enemy: Health,
}

impl View {
    pub const fn new(live: usize, blank: usize, health: Health, enemy: Health) -> Self {
        Self {
            live,
            blank,
            health,
            enemy,
        }
    }
    /// Live charges left.
    pub fn live(&self) -> usize {
        self.live
    }
    /// Blank charges left.
    pub fn blank(&self) -> usize {
        self.blank
    }
    /// Shooter's health.
    pub fn health(&self) -> Health {
        self.health
    }
    /// Opponent's health.
    pub fn enemy(&self) -> Health {
        self.enemy
    }
    pub fn odds(&self) -> Odds {
        Odds::from((self.live, self.blank))
    }
    pub fn is_empty(&self) -> bool {
        self.live + self.blank == 0
    }
}
