// Layout generation: the single pure entry point.
//
// `generate(seed, constraints)` builds a fresh `SeedRng` from the seed, makes
// the two global draws (draw order, then rotation), samples every room's
// dimensions in canonical order (two draws each), places the rooms, rotates
// them, and assembles the immutable `Layout`.
//
// The draw sequence is a protocol, not an implementation detail:
//
//   1. draw order: only when `allow_mirror`
//   2. rotation: only when `allow_rotation`
//   3. for each room in `RoomType::ALL`: width, then height
//
// Reordering any of these changes what every existing seed produces.
//
// See also: `resolve.rs` (step 3), `placement.rs`, `transform.rs`,
// `batch.rs` for generating many layouts at once.
//
// **Critical constraint: determinism.** No global state, no clock, no OS
// entropy. Identical `(seed, constraints)` always yields an identical
// `Layout`.

use crate::config::Constraints;
use crate::placement::place_rooms;
use crate::prng::SeedRng;
use crate::resolve::{Dimensions, sample_room_dimensions};
use crate::transform::apply_rotation;
use crate::types::{
    DirectionTable, DrawOrder, Layout, LayoutMetadata, Metrics, Room, RoomTable, RoomType,
    Rotation,
};

/// Seed fed to the RNG when the caller passes an empty string.
pub const EMPTY_SEED_FALLBACK: &str = "0";

/// Generate one floorplan.
///
/// Never fails: out-of-range constraints are clamped (see `resolve.rs`).
/// The returned layout owns an independent copy of `constraints`.
pub fn generate(seed: &str, constraints: &Constraints) -> Layout {
    let rng_seed = if seed.is_empty() {
        EMPTY_SEED_FALLBACK
    } else {
        seed
    };
    let mut rng = SeedRng::new(rng_seed);

    let draw_order = if constraints.allow_mirror {
        *rng.choice(&DrawOrder::CHOICES)
    } else {
        DrawOrder::Clockwise
    };
    let rotation = if constraints.allow_rotation {
        *rng.choice(&Rotation::CHOICES)
    } else {
        Rotation::R0
    };

    // `from_fn` walks the canonical order, which is the draw order.
    let sizes: RoomTable<Dimensions> = RoomTable::from_fn(|room_type| {
        sample_room_dimensions(
            &constraints.per_room[room_type],
            constraints.variety,
            &mut rng,
        )
    });

    let placement = place_rooms(&sizes, draw_order, constraints.wall_thickness);

    let mut rooms = sizes.map(|room_type, size| {
        let center = placement.centers[room_type];
        Room {
            id: format!("{room_type}-{seed}"),
            room_type,
            x: center.x,
            y: center.y,
            w: size.w,
            h: size.h,
            area: size.area,
            fill: room_type.fill().to_string(),
        }
    });
    apply_rotation(&mut rooms, rotation);

    let layout = assemble(seed, constraints, rooms, rotation, draw_order, placement.directions);
    tracing::debug!(
        id = %layout.id,
        %rotation,
        ?draw_order,
        net_area = layout.metrics.net_area,
        "generated layout"
    );
    layout
}

/// Net area over all six rooms, summed in canonical order.
pub fn net_area(rooms: &RoomTable<Room>) -> f64 {
    rooms.iter().map(|(_, room)| room.area).sum()
}

/// `"<seed>-<hex of floor(|net area|)>"`.
pub fn layout_id(seed: &str, net_area: f64) -> String {
    format!("{seed}-{:x}", net_area.abs().floor() as u64)
}

fn assemble(
    seed: &str,
    constraints: &Constraints,
    rooms: RoomTable<Room>,
    rotation: Rotation,
    draw_order: DrawOrder,
    room_directions: DirectionTable,
) -> Layout {
    let net_area = net_area(&rooms);
    Layout {
        id: layout_id(seed, net_area),
        rooms,
        order: RoomType::ALL,
        metrics: Metrics { net_area },
        // Plain value copy: `Constraints` owns all of its data.
        constraints_used: constraints.clone(),
        metadata: LayoutMetadata {
            seed: seed.to_string(),
            rotation,
            draw_order,
            wall_thickness: constraints.wall_thickness,
            room_directions,
        },
    }
}
