//! Layout module orchestrator.
//!
//! Container splits import their sizing rules from here while the solver
//! lives in the private `core` module.

mod core;

pub use self::core::{Constraint, Direction, split_area};
