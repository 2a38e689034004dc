//! Bird/pipe overlap test
//!
//! Plain axis-aligned boxes: the bird's fixed lane against each pipe pair's
//! solid regions above and below its gap.

use super::state::{Bird, Pipe};
use crate::tuning::Tuning;

/// True when the bird's box touches the solid part of a pipe pair
///
/// Horizontal overlap is inclusive at both edges. Vertically the bird is safe
/// only while it stays strictly inside the gap; sitting flush against a gap
/// edge still counts as inside.
pub fn bird_hits_pipe(bird: &Bird, pipe: &Pipe, tuning: &Tuning) -> bool {
    let bird_left = tuning.bird_lane_x;
    let bird_right = bird_left + tuning.bird_width;
    if pipe.x > bird_right || pipe.x + tuning.pipe_width < bird_left {
        return false;
    }
    // Poking above the gap or hanging below it both count
    pipe.gap_top > bird.y || pipe.gap_bottom(tuning) < bird.bottom(tuning)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Round-number tuning so edge cases compare exactly
    fn square_tuning() -> Tuning {
        Tuning {
            bird_lane_x: 40.0,
            bird_width: 50.0,
            bird_height: 36.0,
            pipe_width: 78.0,
            gap_height: 270.0,
            ..Tuning::default()
        }
    }

    #[test]
    fn test_inside_gap_is_safe() {
        let tuning = square_tuning();
        let pipe = Pipe {
            x: 50.0,
            gap_top: 200.0,
        };

        // Fully inside the gap
        let bird = Bird { y: 300.0, vy: 0.0 };
        assert!(!bird_hits_pipe(&bird, &pipe, &tuning));

        // Flush against the top of the gap - still safe
        let bird = Bird { y: 200.0, vy: 0.0 };
        assert!(!bird_hits_pipe(&bird, &pipe, &tuning));

        // Flush against the bottom of the gap (bottom edge at 470) - still safe
        let bird = Bird { y: 434.0, vy: 0.0 };
        assert!(!bird_hits_pipe(&bird, &pipe, &tuning));
    }

    #[test]
    fn test_poking_out_of_gap_hits() {
        let tuning = square_tuning();
        let pipe = Pipe {
            x: 50.0,
            gap_top: 200.0,
        };

        // One unit above the gap
        let bird = Bird { y: 199.0, vy: 0.0 };
        assert!(bird_hits_pipe(&bird, &pipe, &tuning));

        // One unit below the gap
        let bird = Bird { y: 435.0, vy: 0.0 };
        assert!(bird_hits_pipe(&bird, &pipe, &tuning));
    }

    #[test]
    fn test_horizontal_overlap_is_inclusive() {
        let tuning = square_tuning();
        // Bird is always poking above this gap
        let low_gap = 500.0;

        // Pipe's left edge exactly on the bird's right edge (40 + 50 = 90)
        let pipe = Pipe {
            x: 90.0,
            gap_top: low_gap,
        };
        let bird = Bird { y: 100.0, vy: 0.0 };
        assert!(bird_hits_pipe(&bird, &pipe, &tuning));

        // Pipe's right edge exactly on the bird's left edge (-38 + 78 = 40)
        let pipe = Pipe {
            x: -38.0,
            gap_top: low_gap,
        };
        assert!(bird_hits_pipe(&bird, &pipe, &tuning));

        // Just past either edge - no contact regardless of gap
        let pipe = Pipe {
            x: 90.5,
            gap_top: low_gap,
        };
        assert!(!bird_hits_pipe(&bird, &pipe, &tuning));
        let pipe = Pipe {
            x: -38.5,
            gap_top: low_gap,
        };
        assert!(!bird_hits_pipe(&bird, &pipe, &tuning));
    }
}
