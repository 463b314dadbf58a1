mod action;
mod odds;
mod params;
mod persona;
mod strategy;
mod view;

pub use action::*;
pub use odds::*;
pub use params::*;
pub use persona::*;
pub use strategy::*;
pub use view::*;
