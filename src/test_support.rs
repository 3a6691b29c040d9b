//! ASCII grid fixtures shared by pathfinder test modules.

use crate::{Grid, GridConfig, GridCoord};

/// Builds a single-cell-per-character [`Grid`] from an ASCII layout.
///
/// `x` marks a blocked cell (tag `0`); everything else (including `A`/`B`,
/// which additionally mark the start and goal coordinates) is passable
/// (tag `1`). Rows need not be equal length; missing trailing cells are
/// left at the grid's default tag (also passable).
#[must_use]
pub(crate) fn grid_from_ascii(rows: &[&str]) -> (Grid, GridCoord, GridCoord) {
    let num_rows = rows.len() as u32;
    let num_cols = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0) as u32;

    let mut grid = Grid::new(GridConfig {
        world_width: num_cols,
        world_height: num_rows,
        cell_width: 1,
        cell_height: 1,
        default_tile: 1,
    });

    let mut start = GridCoord::ZERO;
    let mut goal = GridCoord::ZERO;

    for (y, row) in rows.iter().enumerate() {
        for (x, ch) in row.chars().enumerate() {
            let c = GridCoord::new(x as i32, y as i32);
            match ch {
                'x' => grid.set_cell_tile(c, 0),
                'A' => {
                    grid.set_cell_tile(c, 1);
                    start = c;
                }
                'B' | '$' => {
                    grid.set_cell_tile(c, 1);
                    goal = c;
                }
                _ => grid.set_cell_tile(c, 1),
            }
        }
    }

    (grid, start, goal)
}
