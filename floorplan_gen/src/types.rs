// Core layout types shared across the generator.
//
// Defines the closed set of room types (`RoomType`) with its canonical order,
// the per-room-type table (`RoomTable`) used for both constraints and rooms,
// and the immutable output (`Layout` and its parts). Everything derives
// `Serialize`/`Deserialize` with camelCase field names, because the JSON form
// of `Layout` *is* the on-disk dataset format.
//
// Units: lengths in centimetres, areas in square centimetres, rotation in
// degrees.
//
// **Critical constraint: determinism.** `RoomType::ALL` defines both the RNG
// draw order and the placement dependency order. Do not reorder variants.

use crate::config::Constraints;
use crate::error::FloorplanError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

// ---------------------------------------------------------------------------
// Room types
// ---------------------------------------------------------------------------

/// One of the six rooms of a one-bedroom apartment.
///
/// Variant order is the canonical order; `Ord` follows it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Entrance,
    Bathroom,
    Bedroom,
    Kitchen,
    Living,
    Balcony,
}

impl RoomType {
    /// Canonical order: RNG draw order and placement order.
    pub const ALL: [RoomType; 6] = [
        RoomType::Entrance,
        RoomType::Bathroom,
        RoomType::Bedroom,
        RoomType::Kitchen,
        RoomType::Living,
        RoomType::Balcony,
    ];

    /// Position in the canonical order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase identifier, as used in JSON keys and room ids.
    pub fn as_str(self) -> &'static str {
        match self {
            RoomType::Entrance => "entrance",
            RoomType::Bathroom => "bathroom",
            RoomType::Bedroom => "bedroom",
            RoomType::Kitchen => "kitchen",
            RoomType::Living => "living",
            RoomType::Balcony => "balcony",
        }
    }

    /// Human-readable label.
    pub fn display_name(self) -> &'static str {
        match self {
            RoomType::Entrance => "Entrance",
            RoomType::Bathroom => "Bathroom",
            RoomType::Bedroom => "Bedroom",
            RoomType::Kitchen => "Kitchen",
            RoomType::Living => "Living Room",
            RoomType::Balcony => "Balcony",
        }
    }

    /// Fixed fill colour for this room type. Dataset consumers use it as a
    /// class label, so it must stay stable.
    pub fn fill(self) -> &'static str {
        match self {
            RoomType::Entrance => "rgb(255, 214, 0)",
            RoomType::Bathroom => "rgb(255, 0, 176)",
            RoomType::Bedroom => "rgb(0, 86, 255)",
            RoomType::Kitchen => "rgb(0, 200, 220)",
            RoomType::Living => "rgb(0, 140, 60)",
            RoomType::Balcony => "rgb(255, 140, 180)",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RoomTable: one value per room type
// ---------------------------------------------------------------------------

/// A value for each of the six room types.
///
/// Serializes as a JSON object keyed by room type in canonical order. Using
/// named fields instead of a map makes "every room type is present" a
/// type-level guarantee.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoomTable<T> {
    pub entrance: T,
    pub bathroom: T,
    pub bedroom: T,
    pub kitchen: T,
    pub living: T,
    pub balcony: T,
}

impl<T> RoomTable<T> {
    /// Build a table by calling `f` once per room type, in canonical order.
    pub fn from_fn(mut f: impl FnMut(RoomType) -> T) -> Self {
        Self {
            entrance: f(RoomType::Entrance),
            bathroom: f(RoomType::Bathroom),
            bedroom: f(RoomType::Bedroom),
            kitchen: f(RoomType::Kitchen),
            living: f(RoomType::Living),
            balcony: f(RoomType::Balcony),
        }
    }

    /// Transform every entry, keeping the room type alongside.
    pub fn map<U>(&self, mut f: impl FnMut(RoomType, &T) -> U) -> RoomTable<U> {
        RoomTable::from_fn(|room_type| f(room_type, &self[room_type]))
    }

    /// Entries in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (RoomType, &T)> {
        RoomType::ALL.into_iter().map(move |t| (t, &self[t]))
    }

    /// Mutable access to every entry, in canonical order.
    pub fn values_mut(&mut self) -> [&mut T; 6] {
        [
            &mut self.entrance,
            &mut self.bathroom,
            &mut self.bedroom,
            &mut self.kitchen,
            &mut self.living,
            &mut self.balcony,
        ]
    }
}

impl<T> Index<RoomType> for RoomTable<T> {
    type Output = T;

    fn index(&self, room_type: RoomType) -> &T {
        match room_type {
            RoomType::Entrance => &self.entrance,
            RoomType::Bathroom => &self.bathroom,
            RoomType::Bedroom => &self.bedroom,
            RoomType::Kitchen => &self.kitchen,
            RoomType::Living => &self.living,
            RoomType::Balcony => &self.balcony,
        }
    }
}

impl<T> IndexMut<RoomType> for RoomTable<T> {
    fn index_mut(&mut self, room_type: RoomType) -> &mut T {
        match room_type {
            RoomType::Entrance => &mut self.entrance,
            RoomType::Bathroom => &mut self.bathroom,
            RoomType::Bedroom => &mut self.bedroom,
            RoomType::Kitchen => &mut self.kitchen,
            RoomType::Living => &mut self.living,
            RoomType::Balcony => &mut self.balcony,
        }
    }
}

// ---------------------------------------------------------------------------
// Global layout choices
// ---------------------------------------------------------------------------

/// Which direction table the placer walks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawOrder {
    Clockwise,
    Counterclockwise,
}

impl DrawOrder {
    /// Candidates for the mirror draw, in draw-index order.
    pub const CHOICES: [DrawOrder; 2] = [DrawOrder::Clockwise, DrawOrder::Counterclockwise];
}

/// Global rotation of a layout. Serialized as integer degrees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub enum Rotation {
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    /// Candidates for the rotation draw, in draw-index order.
    pub const CHOICES: [Rotation; 4] = [Rotation::R0, Rotation::R90, Rotation::R180, Rotation::R270];

    pub fn degrees(self) -> u16 {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 90,
            Rotation::R180 => 180,
            Rotation::R270 => 270,
        }
    }

    /// Quarter turns reorient a footprint, swapping width and height.
    pub fn is_quarter_turn(self) -> bool {
        matches!(self, Rotation::R90 | Rotation::R270)
    }
}

impl From<Rotation> for u16 {
    fn from(rotation: Rotation) -> u16 {
        rotation.degrees()
    }
}

impl TryFrom<u16> for Rotation {
    type Error = FloorplanError;

    fn try_from(degrees: u16) -> Result<Self, Self::Error> {
        match degrees {
            0 => Ok(Rotation::R0),
            90 => Ok(Rotation::R90),
            180 => Ok(Rotation::R180),
            270 => Ok(Rotation::R270),
            other => Err(FloorplanError::InvalidRotation(other)),
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// Sign pair `[sx, sy]` naming the quadrant a primary room is pushed into.
pub type Direction = [i32; 2];

/// The four direction vectors used for one layout.
pub type DirectionTable = [Direction; 4];

// ---------------------------------------------------------------------------
// Layout output
// ---------------------------------------------------------------------------

/// A placed room. `x`/`y` is the centre relative to the entrance centre.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// `"<type>-<seed>"`.
    pub id: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    /// Always `w * h`.
    pub area: f64,
    pub fill: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    /// Sum of the six room areas (cm²), walls excluded.
    pub net_area: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutMetadata {
    /// The seed exactly as the caller passed it.
    pub seed: String,
    pub rotation: Rotation,
    pub draw_order: DrawOrder,
    pub wall_thickness: f64,
    pub room_directions: DirectionTable,
}

/// One generated floorplan. Created atomically by `generate()` and never
/// mutated afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    /// `"<seed>-<hex floor(net area)>"`. Unique per (seed, constraints) pair.
    pub id: String,
    pub rooms: RoomTable<Room>,
    /// Canonical room order, for consumers that iterate the rooms.
    pub order: [RoomType; 6],
    pub metrics: Metrics,
    /// Independent copy of the constraints this layout was generated from.
    pub constraints_used: Constraints,
    pub metadata: LayoutMetadata,
}

impl Layout {
    /// Rooms in `order`, the sequence renderers draw them in.
    pub fn rooms_in_order(&self) -> impl Iterator<Item = &Room> {
        self.order.iter().map(move |t| &self.rooms[*t])
    }
}
