//! Flappy - a Flappy Bird clone
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bird physics, pipe field, collision, scoring)
//! - `renderer`: WebGPU rendering pipeline
//! - `tuning`: Data-driven game balance

pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (the game advances one tick per nominal 60 Hz frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Field dimensions
    pub const FIELD_WIDTH: f32 = 431.0;
    pub const FIELD_HEIGHT: f32 = 768.0;

    /// Bird bounding box
    pub const BIRD_WIDTH: f32 = 51.0;
    pub const BIRD_HEIGHT: f32 = 36.0;
    /// The bird never moves horizontally; it holds this lane
    pub const BIRD_LANE_X: f32 = FIELD_WIDTH / 10.0;

    /// Physics, in field units per tick
    pub const GRAVITY: f32 = 0.5;
    pub const FLAP_IMPULSE: f32 = -11.5;
    pub const SCROLL_SPEED: f32 = 6.2;

    /// Pipe defaults
    pub const PIPE_WIDTH: f32 = 78.0;
    /// Vertical extent of the passable gap
    pub const GAP_HEIGHT: f32 = 270.0;
    /// Horizontal clearance between consecutive pipes
    pub const PIPE_SPACING: f32 = 270.0;
}
