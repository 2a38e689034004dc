//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick per nominal 60 Hz frame)
//! - Injected, seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::bird_hits_pipe;
pub use state::{Bird, GamePhase, GameState, Pipe, PIPE_COUNT};
pub use tick::{TickInput, tick};
