use crate::coord_map::CoordMap;
use crate::direction::NEIGHBOR_OFFSETS;
use crate::grid_path::GRID_MAP_SIDE;
use crate::pathfinder::{construct_path, find_path_origin, BuildPathResult, Pathfinder};
use crate::{Direction, Grid, GridCoord, GridLayer, MinHeap};

#[derive(Debug, Clone, Copy)]
struct WeightedCoord {
    coord: GridCoord,
    weight: i32,
}

/// A greedy best-first pathfinder.
///
/// Prefers expanding whichever neighbor makes the most progress (smallest
/// Manhattan distance to the goal), following that DFS-style via a "hot"
/// stack frontier; when no neighbor makes progress, or the hot frontier
/// runs dry, it falls back to a min-heap frontier ordered by
/// distance-to-goal. This produces fast, visually clean straight-line
/// paths at the cost of not respecting per-tile movement cost — see
/// [`crate::AStar`] for that.
///
/// Construct once per grid shape and reuse across many
/// [`Pathfinder::build_path`] calls; scratch memory is reset, not
/// reallocated, between queries.
pub struct GreedyBfs {
    frontier: MinHeap<WeightedCoord>,
    hot_frontier: Vec<WeightedCoord>,
    pathmap: CoordMap<Direction>,
}

impl GreedyBfs {
    #[must_use]
    pub fn new(num_cols: u32, num_rows: u32) -> Self {
        let coord_map_cols = num_cols.min(GRID_MAP_SIDE as u32);
        let coord_map_rows = num_rows.min(GRID_MAP_SIDE as u32);
        Self {
            frontier: MinHeap::new(32),
            hot_frontier: Vec::with_capacity(40),
            pathmap: CoordMap::new(coord_map_cols, coord_map_rows),
        }
    }
}

impl Pathfinder for GreedyBfs {
    fn build_path(
        &mut self,
        grid: &Grid,
        from: GridCoord,
        to: GridCoord,
        layer: &GridLayer,
    ) -> BuildPathResult {
        if from == to {
            return BuildPathResult {
                finish: to,
                ..Default::default()
            };
        }

        let origin = find_path_origin(from);
        let local_start = from - origin;
        let local_goal = to - origin;

        self.frontier.reset();
        self.hot_frontier.clear();
        self.hot_frontier.push(WeightedCoord {
            coord: local_start,
            weight: 0,
        });
        self.pathmap.reset();

        let mut shortest_dist = u32::MAX;
        let mut fallback_coord = local_start;
        let mut found_path = false;

        while !self.hot_frontier.is_empty() || !self.frontier.is_empty() {
            let current = if let Some(c) = self.hot_frontier.pop() {
                c
            } else {
                self.frontier.pop().expect("frontier checked non-empty").1
            };

            if current.coord == local_goal {
                found_path = true;
                fallback_coord = current.coord;
                break;
            }
            if current.weight > crate::grid_path::GRID_PATH_MAX_LEN {
                break;
            }

            let dist = local_goal.manhattan_distance(current.coord);
            if dist < shortest_dist {
                shortest_dist = dist;
                fallback_coord = current.coord;
            }

            for (dir_index, &offset) in NEIGHBOR_OFFSETS.iter().enumerate() {
                let next = current.coord + offset;
                let cx = next.x() + origin.x();
                let cy = next.y() + origin.y();
                if cx < 0 || cy < 0 || cx as u32 >= grid.num_cols() || cy as u32 >= grid.num_rows()
                {
                    continue;
                }
                if grid.get_cell_cost_unchecked(cx as u32, cy as u32, layer) == 0 {
                    continue;
                }

                let key = self.pathmap.pack_coord(next);
                if self.pathmap.contains(key) {
                    continue;
                }
                let dir = Direction::from_index(dir_index as u8);
                self.pathmap.set(key, dir);

                let next_dist = local_goal.manhattan_distance(next);
                let next_weighted = WeightedCoord {
                    coord: next,
                    weight: current.weight + 1,
                };
                if next_dist < dist {
                    self.hot_frontier.push(next_weighted);
                } else {
                    self.frontier.push(next_dist as i32, next_weighted);
                }
            }
        }

        let path = construct_path(local_start, fallback_coord, &self.pathmap);
        BuildPathResult {
            cost: path.len() as i32,
            steps: path,
            finish: fallback_coord + origin,
            partial: !found_path,
        }
    }
}
