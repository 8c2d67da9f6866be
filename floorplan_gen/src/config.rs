// Generation constraints, regulation defaults and named presets.
//
// `Constraints` is the full input to `generate()` besides the seed: the
// variety knob, the rotation/mirror switches, the wall thickness, and a
// `RoomConstraints` entry (side-length bounds plus minimum area) for every
// room type. It loads from JSON with the same camelCase field names it is
// snapshotted under in `Layout.constraintsUsed`.
//
// Named presets (`presets()`) tune the regulation defaults for common dataset
// flavours. `sanitized()` applies the clamping an interactive editor performs
// before handing constraints to the generator; the generator itself never
// calls it and only relies on basic arithmetic safety (see `resolve.rs`).
//
// See also: `types.rs` for `RoomTable`, `generate.rs` which consumes
// `Constraints`, `batch.rs` for generation-count limits.

use crate::error::{FloorplanError, Result};
use crate::types::{RoomTable, RoomType};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Seed used when the caller does not supply one.
pub const DEFAULT_SEED: &str = "1001";

/// Side lengths snap to this grid (cm) when sanitized.
const SIDE_STEP: f64 = 10.0;

/// Smallest side length (cm) an editor accepts.
const MIN_SIDE: f64 = 100.0;

/// Smallest minimum-area (cm², i.e. 1 m²) an editor accepts.
const MIN_AREA_FLOOR: f64 = 10_000.0;

/// Per-room-type sampling bounds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomConstraints {
    /// Shortest allowed side (cm).
    pub min_dimension: f64,
    /// Longest allowed side (cm). Expected `>= min_dimension`; when it is not,
    /// the generator collapses the range onto `min_dimension`.
    pub max_dimension: f64,
    /// Minimum floor area (cm²). Silently unmet when larger than
    /// `max_dimension²`.
    pub min_area: f64,
}

/// Which field of a `RoomConstraints` an edit touched. Decides which bound
/// gives way when min and max cross.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConstraintField {
    MinDimension,
    MaxDimension,
    MinArea,
}

impl RoomConstraints {
    pub const fn new(min_dimension: f64, max_dimension: f64, min_area: f64) -> Self {
        Self {
            min_dimension,
            max_dimension,
            min_area,
        }
    }

    /// Clamp an edited entry the way the constraint editor does: sides snap
    /// to 10 cm and never drop below 100 cm, crossed bounds resolve by
    /// raising the maximum, and the minimum area is clamped into
    /// `[max(1 m², min²), max(that, max²)]`.
    pub fn sanitized(&self, changed: ConstraintField) -> Self {
        let min_dimension = round_to_step(self.min_dimension, SIDE_STEP).max(MIN_SIDE);
        let mut max_dimension = round_to_step(self.max_dimension, SIDE_STEP).max(MIN_SIDE);

        let crossed = min_dimension > max_dimension;
        if crossed && changed != ConstraintField::MinArea {
            max_dimension = min_dimension;
        }

        let area_low = MIN_AREA_FLOOR.max(min_dimension * min_dimension);
        let area_high = area_low.max(max_dimension * max_dimension);

        Self {
            min_dimension,
            max_dimension,
            min_area: self.min_area.clamp(area_low, area_high),
        }
    }

    fn check(&self, room_type: RoomType) -> Result<()> {
        let fields = [
            ("minDimension", self.min_dimension),
            ("maxDimension", self.max_dimension),
            ("minArea", self.min_area),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(FloorplanError::InvalidConstraints(format!(
                    "{room_type}.{name} must be a finite non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Everything `generate()` needs besides the seed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraints {
    /// 0.0 pins every side to the midpoint of its range; 1.0 samples the
    /// whole range.
    pub variety: f64,
    /// Allow a random 0/90/180/270° rotation of the whole layout.
    pub allow_rotation: bool,
    /// Allow the counterclockwise (mirrored) direction table.
    pub allow_mirror: bool,
    /// Gap (cm) kept between adjacent rooms.
    pub wall_thickness: f64,
    pub per_room: RoomTable<RoomConstraints>,
}

impl Constraints {
    /// Regulation minimums for a one-bedroom apartment.
    pub fn regulation_defaults() -> Self {
        Self {
            variety: 0.6,
            allow_rotation: true,
            allow_mirror: true,
            wall_thickness: 20.0,
            per_room: RoomTable {
                entrance: RoomConstraints::new(120.0, 400.0, 14_400.0),
                bathroom: RoomConstraints::new(150.0, 400.0, 40_000.0),
                bedroom: RoomConstraints::new(250.0, 600.0, 90_000.0),
                kitchen: RoomConstraints::new(150.0, 400.0, 33_000.0),
                living: RoomConstraints::new(300.0, 700.0, 120_000.0),
                balcony: RoomConstraints::new(140.0, 300.0, 60_000.0),
            },
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load constraints from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| FloorplanError::io(path, e))?;
        Self::from_json_str(&json)
    }

    /// Reject non-finite or negative numbers. The generator assumes these
    /// never reach it, so callers fed by untrusted input should run this
    /// first.
    pub fn validate(&self) -> Result<()> {
        if !self.variety.is_finite() {
            return Err(FloorplanError::InvalidConstraints(format!(
                "variety must be finite, got {}",
                self.variety
            )));
        }
        if !self.wall_thickness.is_finite() || self.wall_thickness < 0.0 {
            return Err(FloorplanError::InvalidConstraints(format!(
                "wallThickness must be a finite non-negative number, got {}",
                self.wall_thickness
            )));
        }
        for (room_type, room) in self.per_room.iter() {
            room.check(room_type)?;
        }
        Ok(())
    }

    /// Editor-style clamping of every field.
    pub fn sanitized(&self) -> Self {
        Self {
            variety: self.variety.clamp(0.0, 1.0),
            allow_rotation: self.allow_rotation,
            allow_mirror: self.allow_mirror,
            wall_thickness: self.wall_thickness.max(0.0),
            per_room: self
                .per_room
                .map(|_, room| room.sanitized(ConstraintField::MinDimension)),
        }
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::regulation_defaults()
    }
}

/// `Math.round`-style rounding (halves go up) onto a grid.
fn round_to_step(value: f64, step: f64) -> f64 {
    (value / step + 0.5).floor() * step
}

// ---------------------------------------------------------------------------
// Presets
// ---------------------------------------------------------------------------

/// A named constraint set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub constraints: Constraints,
}

fn preset(id: &str, name: &str, tweak: impl FnOnce(&mut Constraints)) -> Preset {
    let mut constraints = Constraints::regulation_defaults();
    tweak(&mut constraints);
    Preset {
        id: id.into(),
        name: name.into(),
        description: None,
        constraints,
    }
}

/// Built-in presets, baseline first.
pub fn presets() -> Vec<Preset> {
    vec![
        preset("baseline", "Baseline", |_| {}),
        preset("compact", "Compact Grid", |c| {
            c.variety = 0.25;
            c.allow_rotation = false;
            c.allow_mirror = false;
            c.wall_thickness = 16.0;
        }),
        preset("rotated", "Rotated Courtyard", |c| {
            c.variety = 0.7;
            c.allow_rotation = true;
            c.allow_mirror = false;
        }),
        preset("open-living", "Open Living", |c| {
            c.variety = 0.85;
            c.allow_rotation = true;
            c.allow_mirror = true;
            c.per_room.living.max_dimension = 750.0;
            c.per_room.living.min_area = 150_000.0;
            c.wall_thickness = 18.0;
        }),
        preset("balcony-forward", "Balcony Forward", |c| {
            c.variety = 0.55;
            c.allow_rotation = true;
            c.allow_mirror = true;
            c.per_room.balcony = RoomConstraints::new(180.0, 340.0, 70_000.0);
        }),
    ]
}

/// Look up a built-in preset by id.
pub fn find_preset(id: &str) -> Result<Preset> {
    presets()
        .into_iter()
        .find(|p| p.id == id)
        .ok_or_else(|| FloorplanError::UnknownPreset(id.to_string()))
}
