use crate::*;
use std::collections::BTreeMap;

/// Tuning knobs shared by every strategy.
///
/// The whole bundle is handed to each decision; a strategy reads the fields
/// it cares about and ignores the rest.
///
/// - `threshold`: blank probability above which Conservative aims at itself
/// - `risk_tolerance`: Dynamic attacks while own <= enemy × tolerance
/// - `caution_level`: blank probability above which a comfortable Dynamic
///   aims at itself
/// - `bluff_factor`: chance that Dynamic picks a target at random
#[derive(Debug, Clone, Copy, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Params {
    pub threshold: Probability,
    pub risk_tolerance: Probability,
    pub caution_level: Probability,
    pub bluff_factor: Probability,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            threshold: THRESHOLD,
            risk_tolerance: RISK_TOLERANCE,
            caution_level: CAUTION_LEVEL,
            bluff_factor: BLUFF_FACTOR,
        }
    }
}

impl Params {
    pub const KEYS: [&'static str; 4] = [
        "threshold",
        "risk_tolerance",
        "caution_level",
        "bluff_factor",
    ];

    /// Rejects values no strategy can act on.
    pub fn validate(&self) -> anyhow::Result<()> {
        for (key, value) in [
            ("threshold", self.threshold),
            ("caution_level", self.caution_level),
            ("bluff_factor", self.bluff_factor),
        ] {
            anyhow::ensure!(
                (0.0..=1.0).contains(&value),
                "{} must lie in [0, 1], got {}",
                key,
                value
            );
        }
        anyhow::ensure!(
            self.risk_tolerance.is_finite() && self.risk_tolerance >= 0.0,
            "risk_tolerance must be finite and non-negative, got {}",
            self.risk_tolerance
        );
        Ok(())
    }

    /// Overrides a single parameter by name.
    pub fn set(&mut self, key: &str, value: Probability) -> anyhow::Result<()> {
        match key {
            "threshold" => self.threshold = value,
            "risk_tolerance" => self.risk_tolerance = value,
            "caution_level" => self.caution_level = value,
            "bluff_factor" => self.bluff_factor = value,
            _ => anyhow::bail!("unknown strategy parameter {:?}, expected one of {:?}", key, Self::KEYS),
        }
        Ok(())
    }
}

/// Missing keys keep their defaults; unknown keys and bad values are errors.
impl TryFrom<&BTreeMap<String, Probability>> for Params {
    type Error = anyhow::Error;
    fn try_from(map: &BTreeMap<String, Probability>) -> Result<Self, Self::Error> {
        let mut params = Self::default();
        for (key, value) in map {
            params.set(key, *value)?;
        }
        params.validate()?;
        Ok(params)
    }
}

impl From<Params> for BTreeMap<String, Probability> {
    fn from(params: Params) -> Self {
        Params::KEYS
            .iter()
            .map(|k| k.to_string())
            .zip([
                params.threshold,
                params.risk_tolerance,
                params.caution_level,
                params.bluff_factor,
            ])
            .collect()
    }
}
