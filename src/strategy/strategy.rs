use super::*;
use rand::rngs::SmallRng;

/// A static decision rule for choosing a target.
///
/// Every strategy sees the same inputs: the shooter's [`View`], the shared
/// [`Params`] bundle, and an explicit random source. Deterministic rules
/// simply ignore the generator. Implementations must not carry state
/// between calls; the simulator may call them from several threads.
///
/// # Errors
///
/// A strategy that cannot produce a target returns `Err`. The simulator
/// aborts the game and propagates the error to the caller instead of
/// substituting a default action.
pub trait Strategy: Send + Sync {
    /// Picks a target for the next shot.
    fn decide(&self, view: &View, params: &Params, rng: &mut SmallRng) -> anyhow::Result<Action>;
    /// Short label used in logs and reports.
    fn name(&self) -> &str;
}

impl<S> Strategy for &S
where
    S: Strategy + ?Sized,
{
    fn decide(&self, view: &View, params: &Params, rng: &mut SmallRng) -> anyhow::Result<Action> {
        (**self).decide(view, params, rng)
    }
    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<S> Strategy for Box<S>
where
    S: Strategy + ?Sized,
{
    fn decide(&self, view: &View, params: &Params, rng: &mut SmallRng) -> anyhow::Result<Action> {
        (**self).decide(view, params, rng)
    }
    fn name(&self) -> &str {
        (**self).name()
    }
}
