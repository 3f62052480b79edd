//! Positional weight tables.

/// 8x8 table of integer weights, one per board cell, indexed like the
/// board itself. `Copy`, so every recursive search branch owns a private
/// snapshot and no two branches ever share a mutable table.
pub type WeightMatrix = [i32; 64];

/// Reference weight table.
///
/// Corners dominate, the X and C squares next to them are liabilities, and
/// edges beat interior cells. The table is symmetric under the board's
/// rotations and reflections.
#[rustfmt::skip]
pub const START_WEIGHTS: WeightMatrix = [
     90, -15,  10,   5,   5,  10, -15,  90,
    -15, -25,  -3,  -3,  -3,  -3, -25, -15,
     10,  -3,   2,   1,   1,   2,  -3,  10,
      5,  -3,   1,   1,   1,   1,  -3,   5,
      5,  -3,   1,   1,   1,   1,  -3,   5,
     10,  -3,   2,   1,   1,   2,  -3,  10,
    -15, -25,  -3,  -3,  -3,  -3, -25, -15,
     90, -15,  10,   5,   5,  10, -15,  90,
];
