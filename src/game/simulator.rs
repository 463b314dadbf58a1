use crate::*;
use anyhow::Context;
use rand::rngs::SmallRng;

/// Result of one simulated game.
#[derive(Debug, Clone, PartialEq)]
pub struct Played {
    pub outcome: Outcome,
    /// Shots fired.
    pub turns: usize,
    /// Magazines chambered during play (reloading sources only).
    pub reloads: usize,
    pub player: Health,
    pub dealer: Health,
    /// Per-shot record, when tracing is enabled.
    pub trace: Option<Trace>,
}

impl Played {
    fn finish(outcome: Outcome, game: &Game, trace: Option<Trace>) -> Self {
        Self {
            outcome,
            turns: game.turns(),
            reloads: game.reloads(),
            player: game.health(Actor::Player),
            dealer: game.health(Actor::Dealer),
            trace,
        }
    }
}

/// Plays single games between two strategies.
///
/// The simulator owns the table rules (starting health, retention, opener,
/// turn ceiling) and borrows the two strategies. It carries no per-game
/// state, so one instance can be shared by every worker of a batch.
///
/// # Loop
///
/// 1. Stop if an actor is out of health.
/// 2. Reload an exhausted magazine, or declare a draw if the source is fixed.
/// 3. Ask the shooter's strategy for a target given the remaining counts.
/// 4. Fire, apply damage, move the turn, consume the charge.
#[derive(Clone, Copy)]
pub struct Simulator<'a> {
    player: &'a dyn Strategy,
    dealer: &'a dyn Strategy,
    params: Params,
    health: (Health, Health),
    retention: Retention,
    opener: Opener,
    ceiling: usize,
    traced: bool,
}

impl<'a> Simulator<'a> {
    pub fn new(player: &'a dyn Strategy, dealer: &'a dyn Strategy) -> Self {
        Self {
            player,
            dealer,
            params: Params::default(),
            health: (PLAYER_HEALTH, DEALER_HEALTH),
            retention: Retention::default(),
            opener: Opener::default(),
            ceiling: MAX_TURNS,
            traced: false,
        }
    }
    pub fn params(self, params: Params) -> Self {
        Self { params, ..self }
    }
    pub fn health(self, player: Health, dealer: Health) -> Self {
        Self {
            health: (player, dealer),
            ..self
        }
    }
    pub fn retention(self, retention: Retention) -> Self {
        Self { retention, ..self }
    }
    pub fn opener(self, opener: Opener) -> Self {
        Self { opener, ..self }
    }
    /// Maximum shots per game before the game is aborted as runaway.
    pub fn ceiling(self, ceiling: usize) -> Self {
        Self { ceiling, ..self }
    }
    pub fn traced(self, traced: bool) -> Self {
        Self { traced, ..self }
    }

    pub fn strategy(&self, actor: Actor) -> &'a dyn Strategy {
        match actor {
            Actor::Player => self.player,
            Actor::Dealer => self.dealer,
        }
    }

    /// Plays one game to completion.
    ///
    /// With a `schedule`, draw position `i` is fired by `schedule[i]` and the
    /// retention rule is ignored. Errors are fatal for the game: a failing
    /// strategy, a schedule shorter than the game, or a game that outlives
    /// the turn ceiling.
    pub fn simulate(
        &self,
        source: &Source,
        schedule: Option<&Schedule>,
        rng: &mut SmallRng,
    ) -> anyhow::Result<Played> {
        let (player, dealer) = self.health;
        let opener = self.opener.pick(rng);
        let mut game = Game::new(player, dealer, opener, source.initial());
        let mut trace = self.traced.then(Trace::default);
        loop {
            if let Some(winner) = game.winner() {
                return Ok(Played::finish(Outcome::from(winner), &game, trace));
            }
            if game.magazine().is_empty() {
                match source.refill(rng) {
                    Some(magazine) => game.load(magazine),
                    None => return Ok(Played::finish(Outcome::Draw, &game, trace)),
                }
            }
            anyhow::ensure!(
                game.turns() < self.ceiling,
                "game exceeded {} turns ({} vs {})",
                self.ceiling,
                self.player.name(),
                self.dealer.name()
            );
            let actor = match schedule {
                None => game.actor(),
                Some(schedule) => schedule.get(game.turns()).with_context(|| {
                    format!("turn schedule of length {} ran out", schedule.len())
                })?,
            };
            let view = game.view(actor);
            let strategy = self.strategy(actor);
            let action = strategy
                .decide(&view, &self.params, rng)
                .with_context(|| {
                    format!(
                        "{} strategy {} failed on turn {} facing {}",
                        actor,
                        strategy.name(),
                        game.turns(),
                        game.magazine()
                    )
                })?;
            let turn = game
                .fire(actor, action, self.retention)
                .context("fired an empty magazine")?;
            log::trace!("{}", turn);
            if let Some(ref mut trace) = trace {
                trace.push(turn);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    /// Refuses to choose.
    struct Broken;
    impl Strategy for Broken {
        fn decide(&self, _: &View, _: &Params, _: &mut SmallRng) -> anyhow::Result<Action> {
            Err(anyhow::anyhow!("no target"))
        }
        fn name(&self) -> &str {
            "broken"
        }
    }

    fn fixed(s: &str) -> Source {
        Source::from(Magazine::try_from(s).unwrap())
    }

    #[test]
    fn aggressive_lone_live() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let sim = Simulator::new(&Persona::Aggressive, &Persona::Aggressive).health(1, 1);
        let played = sim.simulate(&fixed("L"), None, rng).unwrap();
        assert!(played.outcome == Outcome::PlayerWin);
        assert!(played.turns == 1);
        let sim = sim.opener(Opener::Dealer);
        let played = sim.simulate(&fixed("L"), None, rng).unwrap();
        assert!(played.outcome == Outcome::DealerWin);
    }

    #[test]
    fn fixed_runs_dry() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let sim = Simulator::new(&Persona::Aggressive, &Persona::Aggressive).health(2, 2);
        let played = sim.simulate(&fixed("BLB"), None, rng).unwrap();
        assert!(played.outcome == Outcome::Draw);
        assert!(played.turns == 3);
        assert!(played.dealer == 2 && played.player == 1);
    }

    #[test]
    fn reload_always_decides() {
        let ref mut rng = SmallRng::seed_from_u64(11);
        for persona in Persona::all() {
            let sim = Simulator::new(&persona, &Persona::Dynamic).health(3, 3);
            let source = Source::reload(Loadout::new(1, 3), MAX_CHARGES);
            for _ in 0..200 {
                let played = sim.simulate(&source, None, rng).unwrap();
                assert!(played.outcome != Outcome::Draw);
                assert!(played.player == 0 || played.dealer == 0);
            }
        }
    }

    #[test]
    fn retention_changes_shooter() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        // conservative player aims at self until only the live charge is left
        let params = Params { threshold: 0.4, ..Params::default() };
        let sim = Simulator::new(&Persona::Conservative, &Persona::Aggressive)
            .params(params)
            .health(1, 1)
            .traced(true);
        let retain = sim.retention(Retention::Retain).simulate(&fixed("BBBL"), None, rng).unwrap();
        let shooters = retain.trace.unwrap().turns().iter().map(|t| t.actor).collect::<Vec<_>>();
        assert!(shooters == vec![Actor::Player; 4]);
        assert!(retain.outcome == Outcome::PlayerWin);
        let pass = sim.retention(Retention::Pass).simulate(&fixed("BBBL"), None, rng).unwrap();
        let shooters = pass.trace.unwrap().turns().iter().map(|t| t.actor).collect::<Vec<_>>();
        assert!(shooters == vec![Actor::Player, Actor::Dealer, Actor::Player, Actor::Dealer]);
        assert!(pass.outcome == Outcome::DealerWin);
    }

    #[test]
    fn schedule_overrides_turns() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let sim = Simulator::new(&Persona::Aggressive, &Persona::Aggressive).health(1, 1);
        let schedule = Schedule::from(vec![Actor::Dealer, Actor::Dealer, Actor::Player]);
        let played = sim.simulate(&fixed("BBL"), Some(&schedule), rng).unwrap();
        assert!(played.outcome == Outcome::PlayerWin);
        let schedule = Schedule::from(vec![Actor::Player, Actor::Player, Actor::Dealer]);
        let played = sim.simulate(&fixed("BBL"), Some(&schedule), rng).unwrap();
        assert!(played.outcome == Outcome::DealerWin);
    }

    #[test]
    fn short_schedule_fails() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let sim = Simulator::new(&Persona::Aggressive, &Persona::Aggressive).health(1, 1);
        let schedule = Schedule::from(vec![Actor::Player]);
        assert!(sim.simulate(&fixed("BL"), Some(&schedule), rng).is_err());
    }

    #[test]
    fn broken_strategy_propagates() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let sim = Simulator::new(&Persona::Aggressive, &Broken).opener(Opener::Dealer);
        let error = sim.simulate(&fixed("LB"), None, rng).unwrap_err();
        assert!(format!("{:#}", error).contains("no target"));
        assert!(format!("{:#}", error).contains("broken"));
    }

    #[test]
    fn ceiling_aborts() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let sim = Simulator::new(&Persona::Aggressive, &Persona::Aggressive).ceiling(1);
        assert!(sim.simulate(&fixed("BL"), None, rng).is_err());
        assert!(sim.health(1, 1).simulate(&fixed("LB"), None, rng).is_ok());
    }

    #[test]
    fn dry_magazine_at_ceiling_draws() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let sim = Simulator::new(&Persona::Aggressive, &Persona::Aggressive)
            .health(3, 3)
            .ceiling(4);
        let played = sim.simulate(&fixed("BLBL"), None, rng).unwrap();
        assert!(played.outcome == Outcome::Draw);
        assert!(played.turns == 4);
        assert!(sim.simulate(&fixed("BLBLB"), None, rng).is_err());
    }

    #[test]
    fn deterministic_given_seed() {
        let sim = Simulator::new(&Persona::Random, &Persona::Dynamic)
            .opener(Opener::Coin)
            .traced(true);
        let source = Source::reload(Loadout::default(), MAX_CHARGES);
        let a = sim.simulate(&source, None, &mut SmallRng::seed_from_u64(5)).unwrap();
        let b = sim.simulate(&source, None, &mut SmallRng::seed_from_u64(5)).unwrap();
        assert!(a == b);
    }

    #[test]
    fn trace_records_state() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let sim = Simulator::new(&Persona::Aggressive, &Persona::Aggressive).health(2, 1).traced(true);
        let played = sim.simulate(&fixed("BLBL"), None, rng).unwrap();
        let trace = played.trace.unwrap();
        assert!(played.outcome == Outcome::DealerWin);
        // player misses, dealer hits, player misses, dealer hits
        assert!(trace.len() == 4);
        assert!(trace.turns()[1].player == 1);
        assert!(trace.turns()[3].player == 0);
        assert!(trace.odds()[0] == Odds::new(0.5, 0.5));
        assert!(trace.odds()[3] == Odds::new(1.0, 0.0));
    }
}
