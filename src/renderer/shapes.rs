//! Scene generation for the playfield
//!
//! Everything is axis-aligned quads in field coordinates (origin top-left,
//! y grows downward). The pipeline maps these to clip space on upload.

use super::vertex::{Vertex, colors};
use crate::sim::GameState;
use crate::tuning::Tuning;

/// How far the pipe lip overhangs the pipe body, in field units
const LIP_OVERHANG: f32 = 4.0;
/// Lip thickness as a fraction of pipe width
const LIP_DEPTH: f32 = 0.18;

/// Append a filled axis-aligned quad as two triangles
fn quad(out: &mut Vec<Vertex>, x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) {
    let (x1, y1) = (x + w, y + h);
    out.push(Vertex::new(x, y, color));
    out.push(Vertex::new(x1, y, color));
    out.push(Vertex::new(x, y1, color));

    out.push(Vertex::new(x1, y, color));
    out.push(Vertex::new(x1, y1, color));
    out.push(Vertex::new(x, y1, color));
}

/// Build the frame's vertex list from the current sim state
///
/// Draw order is back to front: sky, pipe bodies, pipe lips, bird.
pub fn scene(state: &GameState, tuning: &Tuning) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(128);

    // Sky fills the field; the clear color only shows in the letterbox bars
    quad(
        &mut out,
        0.0,
        0.0,
        tuning.field_width,
        tuning.field_height,
        colors::SKY,
    );

    let lip_h = tuning.pipe_width * LIP_DEPTH;
    for pipe in &state.pipes {
        let gap_bottom = pipe.gap_bottom(tuning);

        // Solid pipe above and below the gap
        quad(&mut out, pipe.x, 0.0, tuning.pipe_width, pipe.gap_top, colors::PIPE);
        quad(
            &mut out,
            pipe.x,
            gap_bottom,
            tuning.pipe_width,
            tuning.field_height - gap_bottom,
            colors::PIPE,
        );

        // Darker lips hugging the gap edges, slightly wider than the body
        quad(
            &mut out,
            pipe.x - LIP_OVERHANG,
            pipe.gap_top - lip_h,
            tuning.pipe_width + 2.0 * LIP_OVERHANG,
            lip_h,
            colors::PIPE_LIP,
        );
        quad(
            &mut out,
            pipe.x - LIP_OVERHANG,
            gap_bottom,
            tuning.pipe_width + 2.0 * LIP_OVERHANG,
            lip_h,
            colors::PIPE_LIP,
        );
    }

    // On the attract screen the bird hovers centered instead of in its lane
    let bird_x = if state.is_playing() {
        tuning.bird_lane_x
    } else {
        (tuning.field_width - tuning.bird_width) / 2.0
    };
    let (bw, bh) = (tuning.bird_width, tuning.bird_height);
    let by = state.bird.y;

    quad(&mut out, bird_x, by, bw, bh, colors::BIRD_BODY);
    // Wing, eye and beak are fractions of the body box
    quad(
        &mut out,
        bird_x + bw * 0.12,
        by + bh * 0.42,
        bw * 0.32,
        bh * 0.28,
        colors::BIRD_WING,
    );
    quad(
        &mut out,
        bird_x + bw * 0.62,
        by + bh * 0.16,
        bw * 0.16,
        bh * 0.22,
        colors::BIRD_EYE,
    );
    quad(
        &mut out,
        bird_x + bw * 0.78,
        by + bh * 0.42,
        bw * 0.22,
        bh * 0.22,
        colors::BIRD_BEAK,
    );

    out
}
