// Global rotation of a placed layout.
//
// Rotates every room centre about the origin (the entrance centre) by an
// exact right angle and reorients footprints on quarter turns. Coordinates
// are rounded to three decimals and negative zero is normalized, so the
// serialized output never shows `-0.0` or float noise.

use crate::types::{Room, RoomTable, Rotation};

/// Round half up to three decimals, then fold `-0.0` into `0.0`.
fn round_coordinate(value: f64) -> f64 {
    let rounded = (value * 1000.0 + 0.5).floor() / 1000.0;
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Rotate a point about the origin by an exact right angle.
pub fn rotate_point(x: f64, y: f64, rotation: Rotation) -> (f64, f64) {
    match rotation {
        Rotation::R0 => (x, y),
        Rotation::R90 => (-y, x),
        Rotation::R180 => (-x, -y),
        Rotation::R270 => (y, -x),
    }
}

/// Apply `rotation` to one room in place. Area is unchanged.
pub fn rotate_room(room: &mut Room, rotation: Rotation) {
    if rotation == Rotation::R0 {
        return;
    }
    if rotation.is_quarter_turn() {
        std::mem::swap(&mut room.w, &mut room.h);
    }
    let (x, y) = rotate_point(room.x, room.y, rotation);
    room.x = round_coordinate(x);
    room.y = round_coordinate(y);
}

/// Apply `rotation` to every room. A zero rotation leaves the rooms untouched,
/// including their unrounded coordinates.
pub fn apply_rotation(rooms: &mut RoomTable<Room>, rotation: Rotation) {
    if rotation == Rotation::R0 {
        return;
    }
    for room in rooms.values_mut() {
        rotate_room(room, rotation);
    }
}
