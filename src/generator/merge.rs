/*
merge.rs

Copyright 2025 Hervé Quatremain

This file is part of Dotcirculation.

Dotcirculation is free software: you can redistribute it and/or modify it under
the terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Dotcirculation is distributed in the hope that it will be useful, but WITHOUT
ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Dotcirculation. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Fuse the unit loops of two adjacent blocks.
//!
//! Merging two blocks swaps the successors of two fine cells, one on each side of the shared
//! border. When the two cells belong to different loops, the swap joins the loops into one.
//! Every fine cell is rewired by at most one merge: each corner of a block only serves one
//! border, and the tree gives each border at most one edge.

use log::warn;

use super::blocks::Orientation;
use super::direction::Direction;
use super::grid::Grid;
use super::spanning_tree::CoarseCell;

/// Position of the second block relatively to the first one.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Adjacency {
    Right,
    Left,
    Bottom,
    Top,
}

impl Adjacency {
    /// Return the position of `b` relatively to `a`, or None if the cells are not 4-adjacent.
    pub fn between(a: CoarseCell, b: CoarseCell) -> Option<Self> {
        if a.row == b.row {
            if b.col == a.col + 1 {
                return Some(Adjacency::Right);
            }
            if a.col == b.col + 1 {
                return Some(Adjacency::Left);
            }
        } else if a.col == b.col {
            if b.row == a.row + 1 {
                return Some(Adjacency::Bottom);
            }
            if a.row == b.row + 1 {
                return Some(Adjacency::Top);
            }
        }
        None
    }
}

/// Merge the loops of the blocks owning the coarse cells `a` and `b`.
///
/// Left and top neighbors are handled by swapping the cells, so that the first cell is always the
/// left or the top one.
/// Cells that are not adjacent are ignored.
pub fn merge_blocks(grid: &mut Grid, orientation: Orientation, a: CoarseCell, b: CoarseCell) {
    let (first, second, horizontal) = match Adjacency::between(a, b) {
        Some(Adjacency::Right) => (a, b, true),
        Some(Adjacency::Left) => (b, a, true),
        Some(Adjacency::Bottom) => (a, b, false),
        Some(Adjacency::Top) => (b, a, false),
        None => {
            warn!("Cannot merge blocks {a:?} and {b:?}: not adjacent");
            return;
        }
    };

    // Top-left fine cells of the two blocks
    let (fr1, fc1) = (first.row * 2, first.col * 2);
    let (fr2, fc2) = (second.row * 2, second.col * 2);

    match (horizontal, orientation) {
        // Top-right of the left block goes to the top-left of the right block, bottom-left of the
        // right block comes back to the bottom-right of the left block
        (true, Orientation::Clockwise) => {
            grid.set(fr1, fc1 + 1, Direction::Right);
            grid.set(fr2 + 1, fc2, Direction::Left);
        }
        (true, Orientation::CounterClockwise) => {
            grid.set(fr1 + 1, fc1 + 1, Direction::Right);
            grid.set(fr2, fc2, Direction::Left);
        }
        (false, Orientation::Clockwise) => {
            grid.set(fr1 + 1, fc1 + 1, Direction::Down);
            grid.set(fr2, fc2, Direction::Up);
        }
        (false, Orientation::CounterClockwise) => {
            grid.set(fr1 + 1, fc1, Direction::Down);
            grid.set(fr2, fc2 + 1, Direction::Up);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::blocks::init_blocks;
    use crate::generator::cycle::CyclePath;

    const ORIENTATIONS: [Orientation; 2] = [Orientation::Clockwise, Orientation::CounterClockwise];

    /// Length of the loop going through the cell.
    fn loop_len(grid: &Grid, start: (usize, usize)) -> usize {
        let mut cell = start;
        let mut n = 0;
        loop {
            cell = grid.next_cell(cell.0, cell.1).unwrap();
            n += 1;
            if cell == start {
                return n;
            }
        }
    }

    #[test]
    fn adjacency() {
        let c = CoarseCell::new;
        assert_eq!(Adjacency::between(c(1, 1), c(1, 2)), Some(Adjacency::Right));
        assert_eq!(Adjacency::between(c(1, 1), c(1, 0)), Some(Adjacency::Left));
        assert_eq!(Adjacency::between(c(1, 1), c(2, 1)), Some(Adjacency::Bottom));
        assert_eq!(Adjacency::between(c(1, 1), c(0, 1)), Some(Adjacency::Top));
        assert_eq!(Adjacency::between(c(1, 1), c(2, 2)), None);
        assert_eq!(Adjacency::between(c(1, 1), c(1, 1)), None);
        assert_eq!(Adjacency::between(c(0, 0), c(0, 2)), None);
    }

    #[test]
    fn all_four_directions_join_two_loops() {
        let c = CoarseCell::new;
        let pairs = [
            (c(0, 0), c(0, 1)),
            (c(0, 1), c(0, 0)),
            (c(0, 0), c(1, 0)),
            (c(1, 0), c(0, 0)),
        ];
        for orientation in ORIENTATIONS {
            for (a, b) in pairs {
                let mut grid = Grid::new(4);
                init_blocks(&mut grid, orientation);
                merge_blocks(&mut grid, orientation, a, b);
                assert_eq!(
                    loop_len(&grid, (a.row * 2, a.col * 2)),
                    8,
                    "{orientation} {a:?} -> {b:?}"
                );
                // The blocks not involved keep their own loop
                assert_eq!(loop_len(&grid, (2, 2)), 4);
            }
        }
    }

    #[test]
    fn symmetric_cases_rewire_the_same_cells() {
        let c = CoarseCell::new;
        for orientation in ORIENTATIONS {
            for (a, b) in [(c(0, 0), c(0, 1)), (c(0, 0), c(1, 0))] {
                let mut forward = Grid::new(4);
                init_blocks(&mut forward, orientation);
                let mut backward = forward.clone();
                merge_blocks(&mut forward, orientation, a, b);
                merge_blocks(&mut backward, orientation, b, a);
                assert_eq!(forward, backward);
            }
        }
    }

    #[test]
    fn square_of_blocks_becomes_one_cycle() {
        let c = CoarseCell::new;
        // Every spanning tree of the 2x2 coarse grid, in both orientations
        let sides = [
            (c(0, 0), c(0, 1)),
            (c(0, 1), c(1, 1)),
            (c(1, 1), c(1, 0)),
            (c(1, 0), c(0, 0)),
        ];
        for orientation in ORIENTATIONS {
            for skipped in 0..4 {
                let mut grid = Grid::new(4);
                init_blocks(&mut grid, orientation);
                for (i, (a, b)) in sides.iter().enumerate() {
                    if i != skipped {
                        merge_blocks(&mut grid, orientation, *a, *b);
                    }
                }
                assert!(CyclePath::verify(&grid).is_ok(), "{orientation}\n{grid}");
            }
        }
    }

    #[test]
    fn non_adjacent_cells_are_ignored() {
        let mut grid = Grid::new(4);
        init_blocks(&mut grid, Orientation::Clockwise);
        let before = grid.clone();
        merge_blocks(
            &mut grid,
            Orientation::Clockwise,
            CoarseCell::new(0, 0),
            CoarseCell::new(1, 1),
        );
        assert_eq!(grid, before);
    }
}
