//! Plant care advisory engine

mod conditions;
mod context;
mod engine;

pub use conditions::*;
pub use context::{pest_alert, RuleContext, HEAVY_RAIN_MM, HIGH_UV_INDEX};
pub use engine::*;
