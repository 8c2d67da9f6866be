// floorplan_gen: deterministic one-bedroom floorplan generator.
//
// Given a seed string and a `Constraints` value, `generate()` produces a
// `Layout` of six rooms (entrance, bathroom, bedroom, kitchen, living room,
// balcony) with centres, sizes, areas and provenance metadata. The crate does
// no rendering and no search: one seed, one sample.
//
// Module overview:
// - `types.rs`:     RoomType, RoomTable, Room, Rotation, DrawOrder, Layout.
// - `config.rs`:    Constraints + RoomConstraints, regulation defaults, presets,
//                   editor-style sanitizing and validation.
// - `resolve.rs`:   Variety range narrowing and per-room dimension sampling.
// - `placement.rs`: Direction-vector placement of rooms around the entrance.
// - `transform.rs`: Global right-angle rotation of a placed layout.
// - `generate.rs`:  The `generate()` entry point and layout assembly.
// - `bounds.rs`:    Outer footprint bounds including walls.
// - `batch.rs`:     Seed-token derivation and parallel batch generation.
// - `export.rs`:    JSON export/import (the on-disk dataset format).
// - `error.rs`:     FloorplanError for the fallible edges (files, presets).
// - `prng`:         Re-exported from `floorplan_prng`: string-seeded PRNG.
//
// **Critical constraint: determinism.** `generate()` is a pure function of
// `(seed, constraints)`. All randomness comes from a `SeedRng` built from the
// seed inside the call; there is no global RNG, clock or OS entropy. The RNG
// draw sequence is documented in `generate.rs` and must not change.

pub mod batch;
pub mod bounds;
pub mod config;
pub mod error;
pub mod export;
pub mod generate;
pub mod placement;
pub use floorplan_prng as prng;
pub mod resolve;
pub mod transform;
pub mod types;

pub use config::{Constraints, RoomConstraints};
pub use error::FloorplanError;
pub use generate::generate;
pub use types::{Layout, Room, RoomType};
