#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::coord_map::CoordMap;
use crate::grid_path::{GridPath, GRID_PATH_MAX_LEN};
use crate::{Direction, Grid, GridCoord, GridLayer};

/// The result of a [`Pathfinder::build_path`] call.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuildPathResult {
    /// The steps of the path, `from` to `finish`.
    pub steps: GridPath,
    /// The cell the path actually ends at: `to` on success, or the
    /// closest reachable fallback cell when `partial` is set.
    pub finish: GridCoord,
    /// For [`crate::GreedyBfs`], the step count. For [`crate::AStar`], the
    /// accumulated per-step cost from the layer.
    pub cost: i32,
    /// `true` when `to` could not be reached (out of the search window,
    /// blocked, or beyond [`GRID_PATH_MAX_LEN`] hops); `steps`/`finish`
    /// then describe a best-effort path toward the closest cell visited.
    pub partial: bool,
}

/// Capability shared by [`crate::GreedyBfs`] and [`crate::AStar`]: find a
/// path between two coordinates on a grid, using a layer to interpret
/// tile tags as costs.
///
/// Implementations own all their scratch memory; a `build_path` call
/// performs no heap allocation in steady state. This trait exists so
/// generic callers (and tests) can be written once against either search;
/// nothing in this crate itself calls through `dyn Pathfinder` — both
/// implementors are meant to be used as concrete, monomorphized types on
/// the hot path.
pub trait Pathfinder {
    fn build_path(
        &mut self,
        grid: &Grid,
        from: GridCoord,
        to: GridCoord,
        layer: &GridLayer,
    ) -> BuildPathResult;
}

/// Computes the origin of the local search window for a query starting at
/// `from`. All pathfinder-internal coordinates are translated into this
/// window's frame (`coord - origin`) so they stay small and non-negative,
/// which lets the generational [`CoordMap`]s index them directly.
#[inline]
#[must_use]
pub(crate) fn find_path_origin(from: GridCoord) -> GridCoord {
    let origin_x = (from.x() - GRID_PATH_MAX_LEN).max(0);
    let origin_y = (from.y() - GRID_PATH_MAX_LEN).max(0);
    GridCoord::new(origin_x, origin_y)
}

/// Walks a pathmap from `to` back to `from`, pushing each direction of
/// entry as it goes. Because directions are pushed goal-to-start and
/// [`GridPath`] iterates from the top of its internal stack down, the
/// result iterates start-to-goal with no reversal needed.
///
/// Bounded defensively to at most [`GRID_PATH_MAX_LEN`] steps: `to` is
/// always a cell the search itself visited and recorded a direction for,
/// except at the exact edge where a fallback cell sits on the boundary of
/// the scratch window's capacity (its own pathmap write having been
/// silently dropped, per [`CoordMap`]'s out-of-range semantics). Backing
/// off in that case rather than looping on an unset ([`Direction::None`])
/// entry keeps reconstruction total.
#[must_use]
pub(crate) fn construct_path(
    from: GridCoord,
    to: GridCoord,
    pathmap: &CoordMap<Direction>,
) -> GridPath {
    let mut result = GridPath::default();
    let mut pos = to;
    for _ in 0..=GRID_PATH_MAX_LEN {
        if pos == from {
            break;
        }
        let (d, _) = pathmap.get(pathmap.pack_coord(pos));
        if d == Direction::None {
            break;
        }
        result.push(d);
        pos = pos.reversed_move(d);
    }
    result
}
