//! Canvas module orchestrator.
//!
//! A canvas is the transient cell buffer one draw step writes into before it
//! is applied onto the terminal surface.

mod core;

pub use self::core::Canvas;
