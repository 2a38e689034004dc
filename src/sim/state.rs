//! Game state and core simulation types
//!
//! Everything needed to snapshot or replay a run lives here.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Number of pipe pairs kept alive at once
///
/// Pipes recycle: the one that scrolls off the left edge respawns behind the
/// rightmost, so three cover the field at the default pitch.
pub const PIPE_COUNT: usize = 3;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Attract screen; bird hovers centered, world frozen
    Idle,
    /// Active run
    Playing,
}

/// The player's bird
///
/// Horizontal position is fixed (`Tuning::bird_lane_x`); only vertical motion
/// is simulated. `y` is the top edge of the bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    pub y: f32,
    /// Vertical speed in field units per tick (negative = rising)
    pub vy: f32,
}

impl Bird {
    /// Bird hovering at the vertical center, primed with a flap
    pub fn centered(tuning: &Tuning) -> Self {
        Self {
            y: tuning.bird_center_y(),
            vy: tuning.flap_impulse,
        }
    }

    /// Replace vertical speed with the flap impulse
    pub fn flap(&mut self, tuning: &Tuning) {
        self.vy = tuning.flap_impulse;
    }

    /// Apply gravity and move, clamping at the floor
    ///
    /// There is no ceiling: the bird may leave the top of the field and
    /// flap back down.
    pub fn fall(&mut self, tuning: &Tuning) {
        self.vy += tuning.gravity;
        self.y = (self.y + self.vy).min(tuning.floor_y());
    }

    /// Bottom edge of the bounding box
    pub fn bottom(&self, tuning: &Tuning) -> f32 {
        self.y + tuning.bird_height
    }
}

/// One pipe pair: solid above and below a passable gap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    /// Left edge
    pub x: f32,
    /// Top of the gap
    pub gap_top: f32,
}

impl Pipe {
    /// Spawn a pipe at `x` with a randomly placed gap
    ///
    /// The gap lands so that at least a pipe_width of solid pipe remains
    /// above and below it.
    pub fn spawn<R: Rng>(x: f32, tuning: &Tuning, rng: &mut R) -> Self {
        Self {
            x,
            gap_top: rng.random::<f32>() * tuning.gap_span() + tuning.pipe_width,
        }
    }

    /// Bottom of the gap
    pub fn gap_bottom(&self, tuning: &Tuning) -> f32 {
        self.gap_top + tuning.gap_height
    }

    /// True once the pipe has fully left the field on the left
    pub fn off_screen(&self, tuning: &Tuning) -> bool {
        self.x <= -tuning.pipe_width
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Current phase
    pub phase: GamePhase,
    /// Pipes cleared this run
    pub score: u32,
    /// Highest score seen this session
    pub best_score: u32,
    /// Player bird
    pub bird: Bird,
    /// Pipe pairs ordered left to right
    pub pipes: [Pipe; PIPE_COUNT],
}

impl GameState {
    /// Fresh session: idle, zero scores, pipes staged off the right edge
    pub fn new<R: Rng>(tuning: &Tuning, rng: &mut R) -> Self {
        Self {
            phase: GamePhase::Idle,
            score: 0,
            best_score: 0,
            bird: Bird::centered(tuning),
            pipes: Self::seed_pipes(tuning, rng),
        }
    }

    /// Reset the round after a crash (or for a new session)
    ///
    /// Keeps `best_score`; everything else returns to the staged layout.
    pub fn reset<R: Rng>(&mut self, tuning: &Tuning, rng: &mut R) {
        self.phase = GamePhase::Idle;
        self.score = 0;
        self.bird = Bird::centered(tuning);
        self.pipes = Self::seed_pipes(tuning, rng);
    }

    /// Begin a run; idempotent while already playing
    pub fn start(&mut self) {
        if self.phase == GamePhase::Idle {
            self.phase = GamePhase::Playing;
        }
    }

    /// Flap the bird; allowed in any phase, visible only while playing
    pub fn flap(&mut self, tuning: &Tuning) {
        self.bird.flap(tuning);
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Stage the pipe field just past the right edge, one pitch apart
    fn seed_pipes<R: Rng>(tuning: &Tuning, rng: &mut R) -> [Pipe; PIPE_COUNT] {
        std::array::from_fn(|i| {
            Pipe::spawn(
                tuning.field_width + i as f32 * tuning.pipe_pitch(),
                tuning,
                rng,
            )
        })
    }
}
