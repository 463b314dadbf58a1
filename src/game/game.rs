use crate::*;

/// The state of a game in progress.
///
/// Holds both health counters, the actor whose turn it is under the
/// retention rule, the magazine in the chamber and the number of shots fired.
/// [`fire`](Self::fire) is the only transition; everything else is a read.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    health: [Health; 2],
    actor: Actor,
    magazine: Magazine,
    turns: usize,
    reloads: usize,
}

impl Game {
    pub fn new(player: Health, dealer: Health, opener: Actor, magazine: Magazine) -> Self {
        Self {
            health: [player, dealer],
            actor: opener,
            magazine,
            turns: 0,
            reloads: 0,
        }
    }
    pub fn health(&self, actor: Actor) -> Health {
        self.health[usize::from(actor)]
    }
    /// Whose turn it is under the retention rule.
    pub fn actor(&self) -> Actor {
        self.actor
    }
    pub fn magazine(&self) -> &Magazine {
        &self.magazine
    }
    /// Shots fired so far.
    pub fn turns(&self) -> usize {
        self.turns
    }
    /// Magazines chambered during play.
    pub fn reloads(&self) -> usize {
        self.reloads
    }
    /// The surviving actor once the other is out of health.
    pub fn winner(&self) -> Option<Actor> {
        Actor::all()
            .into_iter()
            .find(|actor| self.health(*actor) == 0)
            .map(|loser| loser.opponent())
    }
    /// What `actor` gets to see before choosing a target.
    pub fn view(&self, actor: Actor) -> View {
        View::new(
            self.magazine.live(),
            self.magazine.blank(),
            self.health(actor),
            self.health(actor.opponent()),
        )
    }
    /// Chambers a fresh magazine in place of the exhausted one.
    pub fn load(&mut self, magazine: Magazine) {
        self.magazine = magazine;
        self.reloads += 1;
    }
    /// Fires the charge under the hammer at the chosen target.
    ///
    /// A live charge costs the target one health; a blank does nothing. The
    /// charge is consumed either way and the turn moves according to
    /// `retention`. Returns `None` without touching state if the magazine is
    /// empty.
    pub fn fire(&mut self, actor: Actor, action: Action, retention: Retention) -> Option<Turn> {
        let odds = Odds::from(&self.magazine);
        let charge = self.magazine.peek()?;
        let target = match action {
            Action::Myself => actor,
            Action::Opponent => actor.opponent(),
        };
        if charge.is_live() {
            let health = &mut self.health[usize::from(target)];
            *health = health.saturating_sub(1);
        }
        self.actor = match retention.keeps(action, charge) {
            true => actor,
            false => actor.opponent(),
        };
        self.magazine.advance();
        self.turns += 1;
        Some(Turn {
            actor,
            action,
            charge,
            odds,
            player: self.health(Actor::Player),
            dealer: self.health(Actor::Dealer),
        })
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "P{:<3}D{:<3}{:<8}{}",
            self.health(Actor::Player),
            self.health(Actor::Dealer),
            self.actor.to_string(),
            self.magazine
        )
    }
}
