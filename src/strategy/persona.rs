use crate::*;
use rand::Rng;
use rand::rngs::SmallRng;

/// The built-in strategies.
///
/// Any persona may sit on either side of the table. Dealer-flavoured rules
/// (`Random`, `Dynamic`) are not restricted to the dealer.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Persona {
    /// Always shoots the opponent.
    #[default]
    Aggressive,
    /// Shoots itself when the blank probability exceeds `threshold`.
    Conservative,
    /// Conservative with a moving threshold of `0.5 + 0.5 × p_blank`.
    Adaptive,
    /// Shoots itself when blanks outnumber lives.
    Probabilistic,
    /// Coin flip.
    Random,
    /// Bluffs, presses when behind, plays safe when ahead.
    Dynamic,
}

impl Persona {
    pub const fn all() -> [Self; 6] {
        [
            Self::Aggressive,
            Self::Conservative,
            Self::Adaptive,
            Self::Probabilistic,
            Self::Random,
            Self::Dynamic,
        ]
    }
    /// One-line summary for selection menus.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Aggressive => "Always shoot the opponent.",
            Self::Conservative => "Shoot self when a blank is likely enough; otherwise shoot the opponent.",
            Self::Adaptive => "Conservative, with a threshold that rises with the blank probability.",
            Self::Probabilistic => "Shoot self when a blank is more likely than a live charge.",
            Self::Random => "Randomly choose to shoot self or the opponent.",
            Self::Dynamic => "Bluff sometimes, press when behind on health, play safe when ahead.",
        }
    }
    /// Whether decisions consume randomness.
    pub fn is_stochastic(&self) -> bool {
        matches!(self, Self::Random | Self::Dynamic)
    }

    fn conservative(view: &View, threshold: Probability) -> Action {
        match view.is_empty() {
            true => Action::Opponent,
            false if view.odds().blank() > threshold => Action::Myself,
            false => Action::Opponent,
        }
    }
    fn adaptive(view: &View) -> Action {
        Self::conservative(view, 0.5 + 0.5 * view.odds().blank())
    }
    fn probabilistic(view: &View) -> Action {
        match view.blank() > view.live() {
            true => Action::Myself,
            false => Action::Opponent,
        }
    }
    fn random(rng: &mut SmallRng) -> Action {
        match rng.random_bool(0.5) {
            true => Action::Myself,
            false => Action::Opponent,
        }
    }
    fn dynamic(view: &View, params: &Params, rng: &mut SmallRng) -> anyhow::Result<Action> {
        anyhow::ensure!(
            (0.0..=1.0).contains(&params.bluff_factor),
            "bluff_factor {} is not a probability",
            params.bluff_factor
        );
        let p_blank = view.odds().blank();
        Ok(if rng.random_bool(params.bluff_factor) {
            Self::random(rng)
        } else if view.health() as Probability <= view.enemy() as Probability * params.risk_tolerance {
            match rng.random_bool(1.0 - p_blank) {
                true => Action::Opponent,
                false => Action::Myself,
            }
        } else if p_blank > params.caution_level {
            Action::Myself
        } else {
            Action::Opponent
        })
    }
}

impl Strategy for Persona {
    fn decide(&self, view: &View, params: &Params, rng: &mut SmallRng) -> anyhow::Result<Action> {
        match self {
            Self::Aggressive => Ok(Action::Opponent),
            Self::Conservative => Ok(Self::conservative(view, params.threshold)),
            Self::Adaptive => Ok(Self::adaptive(view)),
            Self::Probabilistic => Ok(Self::probabilistic(view)),
            Self::Random => Ok(Self::random(rng)),
            Self::Dynamic => Self::dynamic(view, params, rng),
        }
    }
    fn name(&self) -> &str {
        match self {
            Self::Aggressive => "aggressive",
            Self::Conservative => "conservative",
            Self::Adaptive => "adaptive",
            Self::Probabilistic => "probabilistic",
            Self::Random => "random",
            Self::Dynamic => "dynamic",
        }
    }
}

impl TryFrom<&str> for Persona {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let key = s.trim().to_lowercase().replace(['_', ' '], "-");
        match key.as_str() {
            "aggressive" => Ok(Self::Aggressive),
            "conservative" => Ok(Self::Conservative),
            "adaptive" => Ok(Self::Adaptive),
            "probabilistic" | "probability-based" => Ok(Self::Probabilistic),
            "random" => Ok(Self::Random),
            "dynamic" => Ok(Self::Dynamic),
            _ => Err(anyhow::anyhow!("unknown strategy {:?}", s)),
        }
    }
}

impl std::fmt::Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn decide(persona: Persona, view: View, params: Params) -> Action {
        let ref mut rng = SmallRng::seed_from_u64(0);
        persona.decide(&view, &params, rng).unwrap()
    }

    #[test]
    fn aggressive_always_attacks() {
        for (live, blank) in [(0, 0), (1, 5), (5, 1)] {
            let view = View::new(live, blank, 1, 1);
            assert!(decide(Persona::Aggressive, view, Params::default()) == Action::Opponent);
        }
    }

    #[test]
    fn conservative_threshold() {
        let params = Params::default();
        assert!(decide(Persona::Conservative, View::new(1, 4, 2, 2), params) == Action::Myself);
        assert!(decide(Persona::Conservative, View::new(3, 7, 2, 2), params) == Action::Opponent);
        assert!(decide(Persona::Conservative, View::new(1, 1, 2, 2), params) == Action::Opponent);
        let params = Params { threshold: 0.4, ..Params::default() };
        assert!(decide(Persona::Conservative, View::new(1, 1, 2, 2), params) == Action::Myself);
    }

    #[test]
    fn conservative_empty_attacks() {
        let params = Params { threshold: 0.0, ..Params::default() };
        assert!(decide(Persona::Conservative, View::new(0, 0, 2, 2), params) == Action::Opponent);
    }

    #[test]
    fn adaptive_threshold_never_exceeded() {
        for (live, blank) in [(0, 0), (0, 4), (1, 7), (4, 4), (7, 1)] {
            let view = View::new(live, blank, 1, 3);
            assert!(decide(Persona::Adaptive, view, Params::default()) == Action::Opponent);
        }
    }

    #[test]
    fn probabilistic_ties_attack() {
        let params = Params::default();
        assert!(decide(Persona::Probabilistic, View::new(2, 3, 1, 1), params) == Action::Myself);
        assert!(decide(Persona::Probabilistic, View::new(2, 2, 1, 1), params) == Action::Opponent);
        assert!(decide(Persona::Probabilistic, View::new(3, 2, 1, 1), params) == Action::Opponent);
    }

    #[test]
    fn random_is_fair() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let view = View::new(2, 2, 1, 1);
        let params = Params::default();
        let n = 20_000;
        let selfish = (0..n)
            .map(|_| Persona::Random.decide(&view, &params, rng).unwrap())
            .filter(|a| *a == Action::Myself)
            .count();
        assert!((selfish as isize - n / 2).abs() < 500, "{}", selfish);
    }

    #[test]
    fn dynamic_presses_when_behind() {
        let params = Params { bluff_factor: 0.0, ..Params::default() };
        // all blanks left: attacking weight is zero
        assert!(decide(Persona::Dynamic, View::new(0, 3, 1, 2), params) == Action::Myself);
        // all lives left: attacking weight is one
        assert!(decide(Persona::Dynamic, View::new(3, 0, 1, 2), params) == Action::Opponent);
    }

    #[test]
    fn dynamic_cautious_when_ahead() {
        let params = Params { bluff_factor: 0.0, ..Params::default() };
        assert!(decide(Persona::Dynamic, View::new(1, 3, 3, 1), params) == Action::Myself);
        assert!(decide(Persona::Dynamic, View::new(3, 1, 3, 1), params) == Action::Opponent);
        let params = Params { caution_level: 0.8, ..params };
        assert!(decide(Persona::Dynamic, View::new(1, 3, 3, 1), params) == Action::Opponent);
    }

    #[test]
    fn dynamic_always_bluffing_is_fair() {
        let params = Params { bluff_factor: 1.0, ..Params::default() };
        let ref mut rng = SmallRng::seed_from_u64(9);
        let view = View::new(3, 0, 1, 2);
        let n = 20_000;
        let selfish = (0..n)
            .map(|_| Persona::Dynamic.decide(&view, &params, rng).unwrap())
            .filter(|a| *a == Action::Myself)
            .count();
        assert!((selfish as isize - n / 2).abs() < 500, "{}", selfish);
    }

    #[test]
    fn dynamic_rejects_bad_bluff() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let params = Params { bluff_factor: 1.5, ..Params::default() };
        assert!(Persona::Dynamic.decide(&View::new(1, 1, 1, 1), &params, rng).is_err());
    }

    #[test]
    fn parse_names() {
        for persona in Persona::all() {
            assert!(Persona::try_from(persona.name()).unwrap() == persona);
        }
        assert!(Persona::try_from("Probability-Based").unwrap() == Persona::Probabilistic);
        assert!(Persona::try_from("reckless").is_err());
    }
}
