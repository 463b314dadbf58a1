mod batch;
mod config;
mod counts;
mod exhaustive;
mod lengths;
mod montecarlo;
mod tally;
mod trend;

pub use config::*;
pub use counts::*;
pub use exhaustive::*;
pub use lengths::*;
pub use montecarlo::*;
pub use tally::*;
pub use trend::*;
