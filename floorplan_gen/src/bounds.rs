// Footprint bounds of a layout, walls included.
//
// Each room is drawn as a rectangle inset inside a wall-thickness border, so
// the outer footprint is the union of every room rectangle grown by the wall
// thickness on all sides. Renderers use it to fit a layout into a viewport;
// the CLI prints it in its batch summary.

use crate::types::Layout;
use serde::Serialize;

/// Axis-aligned box given by centre and size, in centimetres.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Bounds {
    /// Gross footprint area (cm²), walls and gaps included.
    pub fn area(&self) -> f64 {
        self.w * self.h
    }
}

/// Outer bounds of `layout` including the wall border around every room.
pub fn footprint_bounds(layout: &Layout) -> Bounds {
    let wall = layout.metadata.wall_thickness;
    let mut left = f64::INFINITY;
    let mut right = f64::NEG_INFINITY;
    let mut top = f64::INFINITY;
    let mut bottom = f64::NEG_INFINITY;

    for room in layout.rooms_in_order() {
        left = left.min(room.x - room.w * 0.5 - wall);
        right = right.max(room.x + room.w * 0.5 + wall);
        top = top.min(room.y - room.h * 0.5 - wall);
        bottom = bottom.max(room.y + room.h * 0.5 + wall);
    }

    Bounds {
        x: (left + right) * 0.5,
        y: (top + bottom) * 0.5,
        w: right - left,
        h: bottom - top,
    }
}
