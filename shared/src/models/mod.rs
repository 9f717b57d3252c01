//! Domain models for the Plant Care Advisor

mod plant;
mod task;
mod weather;

pub use plant::*;
pub use task::*;
pub use weather::*;
