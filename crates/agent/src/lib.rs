//! Agent movement: validates single-step moves against the world, expands the
//! world around accepted destinations, and commits each move exactly once.
//!
//! # Invariants
//! - At most one move is in flight; requests while moving are ignored.
//! - The agent position changes only when an accepted move is completed.
//! - The controller holds a coordinate, never a reference into the world.

mod controller;

pub use controller::{
    AgentConfig, AgentController, AgentError, AgentState, BlockReason, MoveOutcome, PendingMove,
};

pub fn crate_info() -> &'static str {
    "hexworld-agent v0.1.0"
}
