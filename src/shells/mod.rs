mod arrangements;
mod charge;
mod loadout;
mod magazine;

pub use arrangements::*;
pub use charge::*;
pub use loadout::*;
pub use magazine::*;
