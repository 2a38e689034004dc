//! Fixed timestep simulation tick
//!
//! Core game loop that advances the simulation deterministically.

use rand::Rng;

use super::collision::bird_hits_pipe;
use super::state::{GamePhase, GameState, Pipe};
use crate::tuning::Tuning;

/// Input commands for a single tick (deterministic)
///
/// The platform shell latches input events between frames, hands the flags
/// to exactly one tick, then clears them.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Begin a run (click/tap/key; only effective while idle)
    pub start: bool,
    /// Flap upward (click/tap/key; sets the bird's speed unconditionally,
    /// which is invisible until a run is underway)
    pub flap: bool,
}

/// Advance the game state by one fixed timestep
///
/// Order within a tick: input, then pipe scroll, then recycling/scoring,
/// then the hit check, and the bird falls last. The hit check therefore
/// sees the bird where it was drawn on the previous frame.
pub fn tick<R: Rng>(state: &mut GameState, input: &TickInput, tuning: &Tuning, rng: &mut R) {
    if input.flap {
        state.flap(tuning);
    }
    if input.start {
        state.start();
    }

    // The world is frozen on the attract screen
    if state.phase != GamePhase::Playing {
        return;
    }

    for pipe in &mut state.pipes {
        pipe.x -= tuning.scroll_speed;
    }

    // A pipe that has fully left the field scores a point and respawns one
    // pitch behind the rightmost pipe.
    while state.pipes[0].off_screen(tuning) {
        state.score += 1;
        state.best_score = state.best_score.max(state.score);
        let next_x = state.pipes[state.pipes.len() - 1].x + tuning.pipe_pitch();
        state.pipes.rotate_left(1);
        let last = state.pipes.len() - 1;
        state.pipes[last] = Pipe::spawn(next_x, tuning, rng);
    }

    if state
        .pipes
        .iter()
        .any(|pipe| bird_hits_pipe(&state.bird, pipe, tuning))
    {
        // Crash: back to the attract screen in the same tick, score wiped,
        // best kept. The shell can detect the phase edge for a game-over cue.
        state.reset(tuning, rng);
        return;
    }

    state.bird.fall(tuning);
}
