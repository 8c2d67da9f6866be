// Room placement: the direction-vector protocol.
//
// The entrance sits at the origin. The three primary rooms (bathroom,
// bedroom, kitchen) are pushed into the quadrant named by their direction
// vector and laid flush against the entrance, alternating edges: odd
// canonical indices (bathroom, kitchen) butt against a vertical edge with the
// wall gap on X, even indices (bedroom) against a horizontal edge with the
// gap on Y. The result is a pinwheel around the entrance.
//
// The two dependent rooms are never placed from scratch. Living hangs off the
// kitchen and balcony off the bedroom, using the primary's direction vector
// and the crossed axis, so each dependent wraps around its primary's outer
// corner. Both cases go through `adjacent_offset`.
//
// All coordinates here are pre-rotation; see `transform.rs`.

use crate::resolve::Dimensions;
use crate::types::{Direction, DirectionTable, DrawOrder, RoomTable, RoomType};

const CLOCKWISE: DirectionTable = [[-1, 1], [-1, -1], [1, -1], [1, 1]];
const COUNTERCLOCKWISE: DirectionTable = [[1, 1], [1, -1], [-1, -1], [-1, 1]];

/// Direction vectors for a draw order.
pub fn direction_table(draw_order: DrawOrder) -> DirectionTable {
    match draw_order {
        DrawOrder::Clockwise => CLOCKWISE,
        DrawOrder::Counterclockwise => COUNTERCLOCKWISE,
    }
}

/// The axis along which a room is pushed off its anchor (and where the wall
/// gap goes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Primary rooms at odd canonical indices attach along X, even along Y.
    pub fn for_index(index: usize) -> Self {
        if index % 2 != 0 { Axis::X } else { Axis::Y }
    }

    pub fn crossed(self) -> Self {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

/// A room centre, in centimetres.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    fn offset(self, dx: f64, dy: f64) -> Point {
        Point {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Raw placement result.
#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    pub centers: RoomTable<Point>,
    pub directions: DirectionTable,
}

/// Offset of `dependent`'s centre from `anchor`'s centre when the two sit
/// side by side along `axis`, separated by `wall`, in the quadrant `dir`.
///
/// Along the attach axis the centres are half the summed extents plus the
/// wall apart; across it the near edges line up, so the centres differ by
/// half the extent difference.
pub fn adjacent_offset(
    anchor: &Dimensions,
    dependent: &Dimensions,
    dir: Direction,
    axis: Axis,
    wall: f64,
) -> (f64, f64) {
    let vx = f64::from(dir[0]);
    let vy = f64::from(dir[1]);
    match axis {
        Axis::X => (
            (dependent.w + anchor.w) * vx * 0.5 + wall * vx,
            (dependent.h - anchor.h) * vy * 0.5,
        ),
        Axis::Y => (
            (dependent.w - anchor.w) * vx * 0.5,
            (dependent.h + anchor.h) * vy * 0.5 + wall * vy,
        ),
    }
}

/// The room that hangs off a primary room, if any.
fn dependent_of(room_type: RoomType) -> Option<RoomType> {
    match room_type {
        RoomType::Kitchen => Some(RoomType::Living),
        RoomType::Bedroom => Some(RoomType::Balcony),
        _ => None,
    }
}

/// Place all six rooms around the entrance.
pub fn place_rooms(
    sizes: &RoomTable<Dimensions>,
    draw_order: DrawOrder,
    wall_thickness: f64,
) -> Placement {
    let directions = direction_table(draw_order);
    let mut centers = RoomTable::from_fn(|_| Point::ORIGIN);
    let entrance = &sizes[RoomType::Entrance];

    for room_type in RoomType::ALL {
        // Entrance stays at the origin; dependents are placed by their primary.
        if room_type == RoomType::Entrance
            || matches!(room_type, RoomType::Living | RoomType::Balcony)
        {
            continue;
        }

        let index = room_type.index();
        let dir = directions[index - 1];
        let axis = Axis::for_index(index);
        let size = &sizes[room_type];

        let (dx, dy) = adjacent_offset(entrance, size, dir, axis, wall_thickness);
        let center = Point::ORIGIN.offset(dx, dy);
        centers[room_type] = center;

        if let Some(dependent) = dependent_of(room_type) {
            let (ex, ey) =
                adjacent_offset(size, &sizes[dependent], dir, axis.crossed(), wall_thickness);
            centers[dependent] = center.offset(ex, ey);
        }

        tracing::trace!(
            room = %room_type,
            x = center.x,
            y = center.y,
            ?dir,
            "placed primary room"
        );
    }

    Placement {
        centers,
        directions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(w: f64, h: f64) -> Dimensions {
        Dimensions { w, h, area: w * h }
    }

    /// The sizes recorded for seed "alpha-1" under regulation defaults.
    fn alpha_sizes() -> RoomTable<Dimensions> {
        RoomTable {
            entrance: dims(260.0, 290.0),
            bathroom: dims(290.0, 250.0),
            bedroom: dims(390.0, 470.0),
            kitchen: dims(220.0, 240.0),
            living: dims(420.0, 470.0),
            balcony: dims(230.0, 260.0),
        }
    }

    #[test]
    fn direction_tables() {
        assert_eq!(direction_table(DrawOrder::Clockwise)[0], [-1, 1]);
        assert_eq!(direction_table(DrawOrder::Counterclockwise)[2], [-1, -1]);
    }

    #[test]
    fn axis_alternates_by_index() {
        assert_eq!(Axis::for_index(1), Axis::X);
        assert_eq!(Axis::for_index(2), Axis::Y);
        assert_eq!(Axis::for_index(3), Axis::X);
        assert_eq!(Axis::X.crossed(), Axis::Y);
    }

    #[test]
    fn adjacent_offset_along_x() {
        let anchor = dims(200.0, 100.0);
        let dep = dims(100.0, 300.0);
        let (dx, dy) = adjacent_offset(&anchor, &dep, [1, -1], Axis::X, 20.0);
        // Edges flush with a 20 cm gap: 100 + 50 + 20.
        assert_eq!(dx, 170.0);
        // Near (top) edges aligned, extending downward.
        assert_eq!(dy, -100.0);
    }

    #[test]
    fn adjacent_offset_along_y() {
        let anchor = dims(200.0, 100.0);
        let dep = dims(100.0, 300.0);
        let (dx, dy) = adjacent_offset(&anchor, &dep, [-1, 1], Axis::Y, 20.0);
        assert_eq!(dx, 50.0);
        assert_eq!(dy, 220.0);
    }

    #[test]
    fn clockwise_placement_matches_recorded_layout() {
        let placement = place_rooms(&alpha_sizes(), DrawOrder::Clockwise, 20.0);
        let c = &placement.centers;
        assert_eq!(c.entrance, Point::ORIGIN);
        assert_eq!(c.bathroom, Point { x: -295.0, y: -20.0 });
        assert_eq!(c.bedroom, Point { x: -65.0, y: -400.0 });
        assert_eq!(c.kitchen, Point { x: 260.0, y: 25.0 });
        assert_eq!(c.living, Point { x: 360.0, y: -350.0 });
        assert_eq!(c.balcony, Point { x: -395.0, y: -295.0 });
        assert_eq!(placement.directions, CLOCKWISE);
    }

    #[test]
    fn primary_rooms_do_not_overlap_entrance() {
        let sizes = alpha_sizes();
        for order in DrawOrder::CHOICES {
            let placement = place_rooms(&sizes, order, 20.0);
            for room_type in [RoomType::Bathroom, RoomType::Bedroom, RoomType::Kitchen] {
                let p = placement.centers[room_type];
                let s = sizes[room_type];
                let e = sizes.entrance;
                let gap_x = p.x.abs() - (s.w + e.w) * 0.5;
                let gap_y = p.y.abs() - (s.h + e.h) * 0.5;
                assert!(
                    gap_x >= 20.0 || gap_y >= 20.0,
                    "{room_type} touches entrance under {order:?}"
                );
            }
        }
    }

    #[test]
    fn dependents_sit_against_their_primary() {
        let sizes = alpha_sizes();
        let placement = place_rooms(&sizes, DrawOrder::Counterclockwise, 15.0);
        for (primary, dependent) in [
            (RoomType::Kitchen, RoomType::Living),
            (RoomType::Bedroom, RoomType::Balcony),
        ] {
            let a = placement.centers[primary];
            let b = placement.centers[dependent];
            let (sa, sb) = (sizes[primary], sizes[dependent]);
            let gap_x = (b.x - a.x).abs() - (sa.w + sb.w) * 0.5;
            let gap_y = (b.y - a.y).abs() - (sa.h + sb.h) * 0.5;
            // Exactly one wall's gap on one axis.
            assert!(
                gap_x == 15.0 || gap_y == 15.0,
                "{dependent} not flush with {primary}: gaps ({gap_x}, {gap_y})"
            );
        }
    }

    #[test]
    fn zero_wall_keeps_rooms_touching() {
        let sizes = RoomTable::from_fn(|_| dims(100.0, 100.0));
        let placement = place_rooms(&sizes, DrawOrder::Clockwise, 0.0);
        assert_eq!(placement.centers.bathroom, Point { x: -100.0, y: 0.0 });
        assert_eq!(placement.centers.bedroom, Point { x: 0.0, y: -100.0 });
    }
}
