//! Data-driven game balance
//!
//! All gameplay numbers live here so the feel of the game can be adjusted
//! without touching simulation code. Values are expressed in field units
//! per tick (the sim runs at a fixed 60 Hz step).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts;

/// A tuning value that failed validation
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("{0} must be positive")]
    NonPositive(&'static str),
    #[error("flap_impulse must be negative (upward), got {0}")]
    FlapNotUpward(f32),
    #[error("gap of {gap_height} plus pipe margins does not fit a field {field_height} tall")]
    GapTooTall { gap_height: f32, field_height: f32 },
    #[error("bird ({bird_height} tall) cannot pass through a gap {gap_height} tall")]
    BirdTooTall { bird_height: f32, gap_height: f32 },
    #[error("bird lane at {bird_lane_x} puts the bird outside a field {field_width} wide")]
    LaneOutOfField { bird_lane_x: f32, field_width: f32 },
    #[error("field {field_width} wide cannot hold a pipe pitch of {pitch}")]
    FieldTooNarrow { field_width: f32, pitch: f32 },
    #[error("invalid tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Gameplay tuning values
///
/// Deserializes with per-field defaults, so a JSON override only needs to
/// name the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Physics (per tick) ===
    /// Downward acceleration added to the bird's vertical speed each tick
    pub gravity: f32,
    /// Vertical speed set by a flap (negative = upward)
    pub flap_impulse: f32,
    /// How far the pipe field scrolls left each tick
    pub scroll_speed: f32,

    // === Bird ===
    pub bird_width: f32,
    pub bird_height: f32,
    /// Fixed x position of the bird's left edge
    pub bird_lane_x: f32,

    // === Pipes ===
    pub pipe_width: f32,
    /// Vertical extent of the passable gap in each pipe pair
    pub gap_height: f32,
    /// Horizontal clearance between consecutive pipes
    pub pipe_spacing: f32,

    // === Field ===
    pub field_width: f32,
    pub field_height: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: consts::GRAVITY,
            flap_impulse: consts::FLAP_IMPULSE,
            scroll_speed: consts::SCROLL_SPEED,

            bird_width: consts::BIRD_WIDTH,
            bird_height: consts::BIRD_HEIGHT,
            bird_lane_x: consts::BIRD_LANE_X,

            pipe_width: consts::PIPE_WIDTH,
            gap_height: consts::GAP_HEIGHT,
            pipe_spacing: consts::PIPE_SPACING,

            field_width: consts::FIELD_WIDTH,
            field_height: consts::FIELD_HEIGHT,
        }
    }
}

impl Tuning {
    /// Parse a JSON override and validate the result
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check that the values describe a playable game
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            (self.gravity, "gravity"),
            (self.scroll_speed, "scroll_speed"),
            (self.bird_width, "bird_width"),
            (self.bird_height, "bird_height"),
            (self.pipe_width, "pipe_width"),
            (self.gap_height, "gap_height"),
            (self.pipe_spacing, "pipe_spacing"),
            (self.field_width, "field_width"),
            (self.field_height, "field_height"),
        ];
        for (value, name) in positive {
            if !(value > 0.0) {
                return Err(TuningError::NonPositive(name));
            }
        }

        if !(self.flap_impulse < 0.0) {
            return Err(TuningError::FlapNotUpward(self.flap_impulse));
        }

        // Gap placement keeps a pipe_width margin above and below, so the
        // gap plus both margins must fit in the field.
        if self.gap_height + 2.0 * self.pipe_width > self.field_height {
            return Err(TuningError::GapTooTall {
                gap_height: self.gap_height,
                field_height: self.field_height,
            });
        }

        if self.bird_height > self.gap_height {
            return Err(TuningError::BirdTooTall {
                bird_height: self.bird_height,
                gap_height: self.gap_height,
            });
        }

        if self.bird_lane_x < 0.0 || self.bird_lane_x + self.bird_width > self.field_width {
            return Err(TuningError::LaneOutOfField {
                bird_lane_x: self.bird_lane_x,
                field_width: self.field_width,
            });
        }

        // The recycled pipe respawns one pitch behind the rightmost; a field
        // narrower than the pitch would leave stretches with no pipe at all.
        if self.field_width < self.pipe_pitch() {
            return Err(TuningError::FieldTooNarrow {
                field_width: self.field_width,
                pitch: self.pipe_pitch(),
            });
        }

        Ok(())
    }

    /// Highest y the bird's top edge can reach while resting on the floor
    pub fn floor_y(&self) -> f32 {
        self.field_height - self.bird_height
    }

    /// y that centers the bird vertically in the field
    pub fn bird_center_y(&self) -> f32 {
        (self.field_height - self.bird_height) / 2.0
    }

    /// Distance between the left edges of consecutive pipes
    pub fn pipe_pitch(&self) -> f32 {
        self.pipe_spacing + self.pipe_width
    }

    /// Width of the random range for gap placement
    ///
    /// The gap top lands in `[pipe_width, pipe_width + gap_span())`, which
    /// leaves at least a pipe_width of solid pipe above and below the gap.
    pub fn gap_span(&self) -> f32 {
        self.field_height - (self.gap_height + self.pipe_width) - self.pipe_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_derived_values() {
        let tuning = Tuning::default();
        assert_eq!(tuning.floor_y(), 732.0);
        assert_eq!(tuning.bird_center_y(), 366.0);
        assert_eq!(tuning.pipe_pitch(), 348.0);
        assert_eq!(tuning.gap_span(), 342.0);
    }

    #[test]
    fn test_rejects_non_positive_gravity() {
        let tuning = Tuning {
            gravity: 0.0,
            ..Tuning::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::NonPositive("gravity"))
        ));
    }

    #[test]
    fn test_rejects_downward_flap() {
        let tuning = Tuning {
            flap_impulse: 2.0,
            ..Tuning::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::FlapNotUpward(_))
        ));
    }

    #[test]
    fn test_rejects_gap_taller_than_field_allows() {
        let tuning = Tuning {
            gap_height: 700.0,
            ..Tuning::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::GapTooTall { .. })
        ));
    }

    #[test]
    fn test_rejects_bird_taller_than_gap() {
        let tuning = Tuning {
            bird_height: 60.0,
            gap_height: 50.0,
            ..Tuning::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::BirdTooTall { .. })
        ));
    }

    #[test]
    fn test_rejects_field_narrower_than_pitch() {
        let tuning = Tuning {
            field_width: 300.0,
            ..Tuning::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::FieldTooNarrow { .. })
        ));
    }

    #[test]
    fn test_json_override_is_partial() {
        let tuning = Tuning::from_json(r#"{"gravity": 0.4, "scroll_speed": 5.0}"#).unwrap();
        assert_eq!(tuning.gravity, 0.4);
        assert_eq!(tuning.scroll_speed, 5.0);
        assert_eq!(tuning.flap_impulse, consts::FLAP_IMPULSE);
        assert_eq!(tuning.field_height, consts::FIELD_HEIGHT);
    }

    #[test]
    fn test_json_override_still_validates() {
        assert!(matches!(
            Tuning::from_json(r#"{"flap_impulse": 3.0}"#),
            Err(TuningError::FlapNotUpward(_))
        ));
    }

    #[test]
    fn test_garbage_json_is_a_parse_error() {
        assert!(matches!(
            Tuning::from_json("not json"),
            Err(TuningError::Parse(_))
        ));
    }
}
