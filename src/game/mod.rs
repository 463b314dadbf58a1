mod actor;
mod game;
mod outcome;
mod rules;
mod simulator;
mod source;
mod trace;

pub use actor::*;
pub use game::*;
pub use outcome::*;
pub use rules::*;
pub use simulator::*;
pub use source::*;
pub use trace::*;
