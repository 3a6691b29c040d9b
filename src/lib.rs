//! gridpath
//! ========
//!
//! A bit-packed 2D tile grid paired with two interchangeable, allocation-free
//! pathfinders for real-time tile-world simulation: [`GreedyBfs`], a greedy
//! best-first search tuned for fast approximate paths, and [`AStar`], a
//! uniform-cost search that respects per-tile movement cost. Both search
//! against a shared [`Grid`]/[`GridLayer`] pair and report their result as a
//! [`BuildPathResult`] wrapping a fixed-capacity, direction-encoded
//! [`GridPath`] — there is no `Result`/`Err` anywhere in the public surface,
//! since an unreachable destination is ordinary data, not a failure.
//!
//! Construct a [`Grid`] once per logical world and a pathfinder once per grid
//! shape; both [`GreedyBfs`] and [`AStar`] reuse their scratch memory across
//! repeated [`Pathfinder::build_path`] calls via generational clearing, so
//! steady-state querying performs zero heap allocation.

mod astar;
mod coord_map;
mod direction;
mod greedy_bfs;
mod grid;
mod grid_coord;
mod grid_layer;
mod grid_path;
mod min_heap;
mod pathfinder;
#[cfg(test)]
mod test_support;

pub use self::{
    astar::*, coord_map::*, direction::*, greedy_bfs::*, grid::*, grid_coord::*, grid_layer::*,
    grid_path::*, min_heap::*, pathfinder::*,
};
