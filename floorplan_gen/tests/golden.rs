// Regression tests against recorded layouts.
//
// `fixtures/alpha-1.json` and `fixtures/gamma-3.json` were recorded from the
// browser generator's engine under the regulation-default constraints.
// alpha-1 is its output verbatim. In gamma-3 the browser draws a 330 cm
// balcony side, over the 300 cm maximum; the envelope clamp brings it back to
// 300, which moves the balcony's centre by 15 cm along that side. Every other
// room matches the browser output.
//
// Every later build must reproduce them exactly: they pin the seed hash, the
// RNG draw sequence, range narrowing, placement and rotation all at once. If
// one of these fails, a change has altered what existing seeds mean.

use floorplan_gen::config::{Constraints, find_preset, presets};
use floorplan_gen::export;
use floorplan_gen::transform::apply_rotation;
use floorplan_gen::types::{DrawOrder, Layout, RoomType, Rotation};
use floorplan_gen::generate;

fn fixture(json: &str) -> Layout {
    export::from_json_str(json).expect("fixture should parse")
}

#[test]
fn alpha_1_matches_recorded_layout() {
    let expected = fixture(include_str!("fixtures/alpha-1.json"));
    let layout = generate("alpha-1", &Constraints::regulation_defaults());
    assert_eq!(layout, expected);
    assert_eq!(layout.id, "alpha-1-9c8b0");
    assert_eq!(layout.metadata.rotation, Rotation::R0);
    assert_eq!(layout.metadata.draw_order, DrawOrder::Clockwise);
}

#[test]
fn gamma_3_matches_recorded_layout() {
    let expected = fixture(include_str!("fixtures/gamma-3.json"));
    let layout = generate("gamma-3", &Constraints::regulation_defaults());
    assert_eq!(layout, expected);
    assert_eq!(layout.metadata.rotation, Rotation::R90);
    assert_eq!(layout.metadata.draw_order, DrawOrder::Counterclockwise);
    assert_eq!(layout.metrics.net_area, 672_600.0);
}

#[test]
fn gamma_3_balcony_is_clamped_to_its_maximum() {
    let layout = generate("gamma-3", &Constraints::regulation_defaults());
    let balcony = &layout.rooms.balcony;
    // Quarter turn: the unrotated height is now the width.
    assert_eq!((balcony.w, balcony.h), (300.0, 170.0));
    assert_eq!((balcony.x, balcony.y), (280.0, 430.0));
    assert_eq!(layout.id, "gamma-3-a4358");
}

#[test]
fn quarter_turn_fixture_reorients_footprints() {
    let rotated = fixture(include_str!("fixtures/gamma-3.json"));
    let mut unrotated = rotated.rooms.clone();
    apply_rotation(&mut unrotated, Rotation::R270);

    for t in RoomType::ALL {
        assert_eq!(rotated.rooms[t].w, unrotated[t].h, "{t}");
        assert_eq!(rotated.rooms[t].h, unrotated[t].w, "{t}");
    }
    // Kitchen sat at (-275, -10) before the 90° turn.
    assert_eq!((unrotated.kitchen.x, unrotated.kitchen.y), (-275.0, -10.0));

    let mut again = unrotated.clone();
    apply_rotation(&mut again, Rotation::R90);
    assert_eq!(again, rotated.rooms);
}

#[test]
fn rooms_never_overlap() {
    for variety in [0.0, 0.5, 1.0] {
        for wall in [0.0, 20.0] {
            let mut c = Constraints::regulation_defaults();
            c.variety = variety;
            c.wall_thickness = wall;
            for i in 0..100 {
                let layout = generate(&format!("overlap-{i}"), &c);
                let rooms: Vec<_> = layout.rooms_in_order().collect();
                for (a_idx, a) in rooms.iter().enumerate() {
                    for b in &rooms[a_idx + 1..] {
                        let apart_x = (a.x - b.x).abs() >= (a.w + b.w) * 0.5;
                        let apart_y = (a.y - b.y).abs() >= (a.h + b.h) * 0.5;
                        assert!(
                            apart_x || apart_y,
                            "{} overlaps {} in {}",
                            a.room_type,
                            b.room_type,
                            layout.id
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn every_preset_generates_within_bounds() {
    for preset in presets() {
        let c = &preset.constraints;
        for i in 0..50 {
            let layout = generate(&format!("{}-{i}", preset.id), c);
            let swapped = layout.metadata.rotation.is_quarter_turn();
            for t in RoomType::ALL {
                let room = &layout.rooms[t];
                let rc = &c.per_room[t];
                let (w, h) = if swapped { (room.h, room.w) } else { (room.w, room.h) };
                assert!((rc.min_dimension..=rc.max_dimension).contains(&w));
                assert!((rc.min_dimension..=rc.max_dimension).contains(&h));
            }
            assert_eq!(&layout.constraints_used, c);
        }
    }
}

#[test]
fn compact_preset_is_never_rotated_or_mirrored() {
    let c = find_preset("compact").unwrap().constraints;
    for i in 0..100 {
        let layout = generate(&format!("compact-{i}"), &c);
        assert_eq!(layout.metadata.rotation, Rotation::R0);
        assert_eq!(layout.metadata.draw_order, DrawOrder::Clockwise);
        assert_eq!(layout.metadata.wall_thickness, 16.0);
    }
}
