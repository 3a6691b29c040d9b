use crate::coord_map::CoordMap;
use crate::direction::NEIGHBOR_OFFSETS;
use crate::grid_path::{GRID_MAP_SIDE, GRID_PATH_MAX_LEN};
use crate::pathfinder::{construct_path, find_path_origin, BuildPathResult, Pathfinder};
use crate::{Direction, Grid, GridCoord, GridLayer, MinHeap};

/// Size hints for [`AStar::new`]. A `0` field is treated as "allocate the
/// maximum working area" ([`GRID_MAP_SIDE`]); the [`Default`] impl does
/// exactly that for both fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AStarConfig {
    pub num_cols: u32,
    pub num_rows: u32,
}

impl Default for AStarConfig {
    fn default() -> Self {
        Self {
            num_cols: GRID_MAP_SIDE as u32,
            num_rows: GRID_MAP_SIDE as u32,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct AStarCoord {
    coord: GridCoord,
    weight: i32,
    cost: u32,
}

/// An A* pathfinder: slower than [`crate::GreedyBfs`] but weight-aware,
/// honoring per-tile movement cost via a `g + h` priority.
///
/// Construct once per grid shape and reuse across many
/// [`Pathfinder::build_path`] calls; scratch memory is reset, not
/// reallocated, between queries.
pub struct AStar {
    frontier: MinHeap<AStarCoord>,
    costmap: CoordMap<u32>,
    pathmap: CoordMap<Direction>,
}

impl AStar {
    #[must_use]
    pub fn new(config: AStarConfig) -> Self {
        let num_cols = if config.num_cols == 0 {
            GRID_MAP_SIDE as u32
        } else {
            config.num_cols
        };
        let num_rows = if config.num_rows == 0 {
            GRID_MAP_SIDE as u32
        } else {
            config.num_rows
        };
        let coord_map_cols = num_cols.min(GRID_MAP_SIDE as u32);
        let coord_map_rows = num_rows.min(GRID_MAP_SIDE as u32);
        Self {
            frontier: MinHeap::new(32),
            costmap: CoordMap::new(coord_map_cols, coord_map_rows),
            pathmap: CoordMap::new(coord_map_cols, coord_map_rows),
        }
    }
}

impl Pathfinder for AStar {
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
        self.pathmap.reset();
        self.costmap.reset();

        self.frontier.push(
            0,
            AStarCoord {
                coord: local_start,
                weight: 0,
                cost: 0,
            },
        );

        let mut shortest_dist = u32::MAX;
        let mut fallback_coord = local_start;
        let mut fallback_cost = 0i32;
        let mut found = false;
        let mut finish_cost = 0i32;

        while let Some((_, current)) = self.frontier.pop() {
            if current.coord == local_goal {
                finish_cost = current.cost as i32;
                found = true;
                break;
            }
            if current.weight > GRID_PATH_MAX_LEN {
                break;
            }

            let dist = local_goal.manhattan_distance(current.coord);
            if dist < shortest_dist {
                shortest_dist = dist;
                fallback_coord = current.coord;
                fallback_cost = current.cost as i32;
            }

            // The popped cost may be stale if this coordinate was pushed
            // more than once before the cheapest entry surfaced; the
            // costmap always holds the best cost found so far.
            let (current_cost, _) = self.costmap.get(self.costmap.pack_coord(current.coord));

            for (dir_index, &offset) in NEIGHBOR_OFFSETS.iter().enumerate() {
                let next = current.coord + offset;
                let cx = next.x() + origin.x();
                let cy = next.y() + origin.y();
                if cx < 0 || cy < 0 || cx as u32 >= grid.num_cols() || cy as u32 >= grid.num_rows()
                {
                    continue;
                }
                let next_cell_cost = grid.get_cell_cost_unchecked(cx as u32, cy as u32, layer);
                if next_cell_cost == 0 {
                    continue;
                }

                let new_next_cost = current_cost + next_cell_cost as u32;
                let key = self.costmap.pack_coord(next);
                let (old_next_cost, ok) = self.costmap.get(key);
                if ok && new_next_cost >= old_next_cost {
                    continue;
                }
                self.costmap.set(key, new_next_cost);

                let priority = new_next_cost + local_goal.manhattan_distance(next);
                let next_weighted = AStarCoord {
                    coord: next,
                    weight: current.weight + 1,
                    cost: new_next_cost,
                };
                self.frontier.push(priority as i32, next_weighted);
                self.pathmap.set(key, Direction::from_index(dir_index as u8));
            }
        }

        if found {
            BuildPathResult {
                steps: construct_path(local_start, local_goal, &self.pathmap),
                finish: to,
                cost: finish_cost,
                partial: false,
            }
        } else {
            BuildPathResult {
                steps: construct_path(local_start, fallback_coord, &self.pathmap),
                finish: fallback_coord + origin,
                cost: fallback_cost,
                partial: true,
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_support::grid_from_ascii;
    use crate::{GridConfig, GridLayer};

    #[test]
    fn test_prefers_cheap_route_over_short_route() {
        // Tags: 0=rock(blocked), 1=plain(cost 1), 2=swamp(cost 5).
        // A 3x3 grid where the direct diagonal-ish route crosses swamp and
        // a longer route around it is actually cheaper.
        let (mut grid, start, _goal) = grid_from_ascii(&["A..", "...", "..."]);
        let goal = GridCoord::new(2, 2);
        grid.set_cell_tile(GridCoord::new(1, 0), 2);
        grid.set_cell_tile(GridCoord::new(2, 0), 2);
        grid.set_cell_tile(GridCoord::new(1, 1), 2);

        let layer = GridLayer::new([0, 1, 5, 0, 0, 0, 0, 0]);

        let mut astar = AStar::new(AStarConfig {
            num_cols: grid.num_cols(),
            num_rows: grid.num_rows(),
        });
        let result = astar.build_path(&grid, start, goal, &layer);

        assert!(!result.partial);
        assert_eq!(result.finish, goal);
        assert_eq!(result.cost, 4);
        // The only cost-4 route avoids the swamp entirely by going down the
        // left edge before turning right along the bottom row.
        let steps: Vec<Direction> = result.steps.collect();
        assert_eq!(
            steps,
            vec![Direction::Down, Direction::Down, Direction::Right, Direction::Right]
        );
    }

    #[test]
    fn test_identity() {
        let grid = Grid::new(GridConfig {
            world_width: 3,
            world_height: 3,
            cell_width: 1,
            cell_height: 1,
            default_tile: 1,
        });
        let p = GridCoord::new(1, 1);
        let layer = GridLayer::new([0, 1, 1, 1, 0, 0, 0, 0]);
        let mut astar = AStar::new(AStarConfig::default());
        let result = astar.build_path(&grid, p, p, &layer);

        assert!(!result.partial);
        assert!(result.steps.is_empty());
        assert_eq!(result.finish, p);
        assert_eq!(result.cost, 0);
    }

    #[test]
    fn test_blocked_goal_returns_partial() {
        let (grid, start, goal) = grid_from_ascii(&["A    x.B", ".....x.."]);
        let layer = GridLayer::new([0, 1, 1, 1, 0, 0, 0, 0]);
        let mut astar = AStar::new(AStarConfig {
            num_cols: grid.num_cols(),
            num_rows: grid.num_rows(),
        });
        let result = astar.build_path(&grid, start, goal, &layer);

        assert!(result.partial);
        assert_eq!(result.finish, GridCoord::new(4, 0));
    }

    #[test]
    fn test_default_config_uses_max_working_area() {
        let config = AStarConfig::default();
        assert_eq!(config.num_cols, GRID_MAP_SIDE as u32);
        assert_eq!(config.num_rows, GRID_MAP_SIDE as u32);
    }
}
