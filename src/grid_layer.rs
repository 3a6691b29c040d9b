#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A tile-tag-to-cost lookup table.
///
/// Every [`Grid`](crate::Grid) cell holds a small tile tag (0..8). A
/// `GridLayer` turns that tag into a traversal cost: `0` means the cell
/// can't be traversed, any non-zero byte is the per-step cost a
/// pathfinder pays to enter a cell with that tag.
///
/// A second, parallel table (`blocked`) provides the cost to apply when a
/// cell's high "blocked" bit is set (the 8-tile-class extended grid
/// variant); a `0` there keeps the cell impassable regardless of its tag.
/// This crate's [`Grid`] only ever produces tags in `0..4`, but `GridLayer`
/// itself covers the full `0..8` range so either grid variant can share it.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayer {
    table: [u8; 8],
    blocked_table: [u8; 8],
}

impl GridLayer {
    /// Builds a layer from a tag-to-cost table. Tiles have no blocked-bit
    /// cost override; see [`GridLayer::with_blocked`] for that.
    #[inline]
    #[must_use]
    pub fn new(values: [u8; 8]) -> Self {
        Self::with_blocked(values, [0; 8])
    }

    /// Builds a layer from a tag-to-cost table plus a separate table used
    /// when a cell's blocked bit is set. A `0` in `blocked` keeps that tag
    /// impassable even while blocked.
    #[inline]
    #[must_use]
    pub fn with_blocked(values: [u8; 8], blocked: [u8; 8]) -> Self {
        Self {
            table: values,
            blocked_table: blocked,
        }
    }

    /// Maps a tile tag into a traversal cost. Tags outside `0..8` are
    /// masked into range rather than read out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, tag: u8) -> u8 {
        self.table[(tag & 0b111) as usize]
    }

    /// Hot-path variant of [`GridLayer::get`], identical in this
    /// memory-safe implementation but kept as a distinct name to mirror
    /// the inlined, no-bounds-check intent of the hot search loop.
    #[inline]
    #[must_use]
    pub fn get_fast(&self, tag: u8) -> u8 {
        self.table[(tag & 0b111) as usize]
    }

    /// Maps a tile tag into the blocked-cell traversal cost.
    #[inline]
    #[must_use]
    pub fn get_blocked(&self, tag: u8) -> u8 {
        self.blocked_table[(tag & 0b111) as usize]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_get() {
        let tests: Vec<[u8; 8]> = vec![
            [0, 0, 0, 0, 0, 0, 1, 0],
            [0, 0, 0, 1, 0, 0, 2, 0],
            [1, 0, 0, 0, 0, 0, 3, 0],
            [1, 1, 1, 1, 0, 0, 4, 0],
            [10, 0, 10, 0, 0, 0, 0, 0xff],
            [1, 2, 3, 4, 0, 0, 0, 0],
            [4, 3, 2, 1, 0, 0, 0, 0],
            [0xff, 0xff, 0xff, 0xff, 0, 0xff, 0, 0],
            [100, 0xff, 0xff, 100, 0, 0, 0xfe, 0xfa],
        ];

        for test in tests {
            let l = GridLayer::new(test);
            for i in 0u8..=7 {
                assert_eq!(l.get(i), test[i as usize]);
                assert_eq!(l.get_fast(i), test[i as usize]);
            }
        }
    }

    #[test]
    fn test_get_blocked() {
        let mut values = [0u8; 8];
        values[1] = 11;
        let mut blocked = [0u8; 8];
        blocked[2] = 22;

        let l = GridLayer::with_blocked(values, blocked);
        assert_eq!(l.get(1), 11);
        assert_eq!(l.get(0), 0);
        assert_eq!(l.get_blocked(2), 22);
        assert_eq!(l.get_blocked(1), 0);
    }

    #[test]
    fn test_out_of_range_tag_is_masked() {
        let mut values = [0u8; 8];
        values[2] = 9;
        let l = GridLayer::new(values);
        // tag 10 masks to 2 (0b1010 & 0b111 == 0b010)
        assert_eq!(l.get(10), 9);
    }
}
