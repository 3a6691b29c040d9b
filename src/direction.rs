#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::GridCoord;
use std::fmt;

/// One of the four cardinal movement directions, plus a sentinel "no
/// direction" value.
///
/// The numeric order of the four cardinal variants is a stable contract:
/// it indexes the fixed neighbor-offset table used by the pathfinders, and
/// the same numeric value is what gets packed into a [`GridPath`](crate::GridPath)
/// and a pathmap [`CoordMap`](crate::CoordMap). Do not reorder these.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Right = 0,
    Down = 1,
    Left = 2,
    Up = 3,
    #[default]
    None = 4,
}

pub(crate) const NEIGHBOR_OFFSETS: [GridCoord; 4] = [
    GridCoord::new(1, 0),
    GridCoord::new(0, 1),
    GridCoord::new(-1, 0),
    GridCoord::new(0, -1),
];

impl Direction {
    /// Returns the direction array index (`Right`=0 .. `Up`=3) for use as a
    /// neighbor-offset table index. Returns `4` for [`Direction::None`],
    /// which is not a valid [`NEIGHBOR_OFFSETS`] index; callers that need a
    /// table lookup must only pass a cardinal direction.
    #[inline]
    #[must_use]
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    #[inline]
    #[must_use]
    pub(crate) fn from_index(i: u8) -> Direction {
        match i {
            0 => Direction::Right,
            1 => Direction::Down,
            2 => Direction::Left,
            3 => Direction::Up,
            _ => Direction::None,
        }
    }

    /// Returns the opposite direction. `Right` becomes `Left`, `Down`
    /// becomes `Up`, and so on. `None` reverses to itself.
    #[inline]
    #[must_use]
    pub fn reversed(self) -> Direction {
        match self {
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
            Direction::None => Direction::None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Right => "Right",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Up => "Up",
            Direction::None => "None",
        };
        f.write_str(s)
    }
}
