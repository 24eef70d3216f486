/*
cycle.rs

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

//! Cycle traversal of a generated grid.
//!
//! Tokens moving along the cycle go from a cell to the cell its direction points to.
//! [`CyclePath`] records that order once, so that positions along the loop can be looked up
//! without following the directions again.

use log::debug;
use std::collections::HashMap;
use std::error::Error;
use std::fmt;

use super::direction::Direction;
use super::grid::Grid;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum CycleError {
    /// The grid has no cells.
    Empty,

    /// The start cell is outside the grid.
    StartOutside { row: usize, col: usize },

    /// The cell holds no direction.
    Unset { row: usize, col: usize },

    /// The direction of the cell leaves the grid.
    OffGrid {
        row: usize,
        col: usize,
        direction: Direction,
    },

    /// The traversal reached a cell already visited, other than the start cell.
    Revisited { row: usize, col: usize, step: usize },

    /// The traversal came back to the start before visiting every cell.
    ShortCycle { length: usize, expected: usize },
}

impl fmt::Display for CycleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CycleError::Empty => write!(f, "the grid is empty"),
            CycleError::StartOutside { row, col } => {
                write!(f, "start cell ({row}, {col}) is outside the grid")
            }
            CycleError::Unset { row, col } => write!(f, "cell ({row}, {col}) has no direction"),
            CycleError::OffGrid {
                row,
                col,
                direction,
            } => write!(f, "cell ({row}, {col}) points {direction}, outside the grid"),
            CycleError::Revisited { row, col, step } => {
                write!(f, "cell ({row}, {col}) visited twice (step {step})")
            }
            CycleError::ShortCycle { length, expected } => {
                write!(f, "cycle of {length} cells instead of {expected}")
            }
        }
    }
}

impl Error for CycleError {}

/// Cells of the cycle in travel order.
#[derive(Debug, Default, Clone)]
pub struct CyclePath {
    /// Cells in the order the cycle visits them, starting from the traced cell.
    path: Vec<(usize, usize)>,

    /// Position of each cell in [`CyclePath::path`].
    index: HashMap<(usize, usize), usize>,
}

impl PartialEq for CyclePath {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl CyclePath {
    /// Follow the directions of the grid from `start` until the traversal comes back to it.
    ///
    /// # Errors
    ///
    /// The method returns an error if the directions do not describe a single cycle covering all
    /// the cells of the grid.
    pub fn trace(grid: &Grid, start: (usize, usize)) -> Result<Self, CycleError> {
        let expected: usize = grid.len();
        if expected == 0 {
            return Err(CycleError::Empty);
        }
        if start.0 >= grid.size() || start.1 >= grid.size() {
            return Err(CycleError::StartOutside {
                row: start.0,
                col: start.1,
            });
        }

        let mut path: Vec<(usize, usize)> = Vec::with_capacity(expected);
        let mut index: HashMap<(usize, usize), usize> = HashMap::with_capacity(expected);
        let mut cell: (usize, usize) = start;

        loop {
            index.insert(cell, path.len());
            path.push(cell);

            let (row, col) = cell;
            let direction: Direction = grid.get(row, col).ok_or(CycleError::Unset { row, col })?;
            let next: (usize, usize) =
                direction
                    .step(row, col, grid.size())
                    .ok_or(CycleError::OffGrid {
                        row,
                        col,
                        direction,
                    })?;

            if next == start {
                break;
            }
            if index.contains_key(&next) {
                return Err(CycleError::Revisited {
                    row: next.0,
                    col: next.1,
                    step: path.len(),
                });
            }
            cell = next;
        }

        if path.len() != expected {
            debug!("Cycle from {start:?} covers {} of {expected} cells", path.len());
            return Err(CycleError::ShortCycle {
                length: path.len(),
                expected,
            });
        }
        Ok(Self { path, index })
    }

    /// Verify that the grid holds a single cycle through all its cells.
    ///
    /// Every cell has one successor, so a full-length cycle from one cell passes through all the
    /// others.
    pub fn verify(grid: &Grid) -> Result<(), CycleError> {
        Self::trace(grid, (0, 0)).map(|_| ())
    }

    /// Number of cells in the cycle.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Whether the cycle has no cells.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Return a reference to the ordered cell list.
    pub fn get(&self) -> &Vec<(usize, usize)> {
        &self.path
    }

    /// Return the position of the cell in the cycle.
    pub fn index_of(&self, cell: (usize, usize)) -> Option<usize> {
        self.index.get(&cell).copied()
    }

    /// Return the cell at the given position. Positions wrap around the cycle.
    pub fn cell_at(&self, position: usize) -> Option<(usize, usize)> {
        if self.path.is_empty() {
            None
        } else {
            Some(self.path[position % self.path.len()])
        }
    }

    /// Return the cell reached after moving `steps` cells forward from `cell`.
    pub fn advance(&self, cell: (usize, usize), steps: usize) -> Option<(usize, usize)> {
        let i: usize = self.index_of(cell)?;
        self.cell_at(i + steps % self.path.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from(rows: &[&[u8]]) -> Grid {
        let rows: Vec<Vec<u8>> = rows.iter().map(|r| r.to_vec()).collect();
        Grid::from_codes(&rows).unwrap()
    }

    #[test]
    fn traces_a_block() {
        let grid = grid_from(&[&[3, 4], &[2, 1]]);
        let cycle = CyclePath::trace(&grid, (0, 0)).unwrap();
        assert_eq!(cycle.get(), &vec![(0, 0), (0, 1), (1, 1), (1, 0)]);
        assert_eq!(cycle.index_of((1, 1)), Some(2));
        assert_eq!(cycle.cell_at(5), Some((0, 1)));
        assert_eq!(cycle.advance((1, 0), 1), Some((0, 0)));
        assert_eq!(cycle.advance((0, 1), 10), Some((1, 0)));
        assert_eq!(cycle.advance((5, 5), 1), None);
    }

    #[test]
    fn detects_unset_cell() {
        let grid = grid_from(&[&[3, 4], &[0, 1]]);
        assert_eq!(
            CyclePath::verify(&grid),
            Err(CycleError::Unset { row: 1, col: 0 })
        );
    }

    #[test]
    fn detects_off_grid_direction() {
        let grid = grid_from(&[&[2, 4], &[2, 1]]);
        assert_eq!(
            CyclePath::verify(&grid),
            Err(CycleError::OffGrid {
                row: 0,
                col: 0,
                direction: Direction::Up
            })
        );
    }

    #[test]
    fn detects_short_cycle() {
        // Four separate blocks
        let grid = grid_from(&[
            &[3, 4, 3, 4],
            &[2, 1, 2, 1],
            &[3, 4, 3, 4],
            &[2, 1, 2, 1],
        ]);
        assert_eq!(
            CyclePath::verify(&grid),
            Err(CycleError::ShortCycle {
                length: 4,
                expected: 16
            })
        );
    }

    #[test]
    fn detects_revisit() {
        // (0,0) -> (0,1) -> (1,1) -> (1,0) -> (1,1)
        let grid = grid_from(&[&[3, 4], &[3, 1]]);
        assert_eq!(
            CyclePath::verify(&grid),
            Err(CycleError::Revisited {
                row: 1,
                col: 1,
                step: 4
            })
        );
    }

    #[test]
    fn rejects_empty_grid_and_outside_start() {
        assert_eq!(CyclePath::verify(&Grid::new(0)), Err(CycleError::Empty));
        let grid = grid_from(&[&[3, 4], &[2, 1]]);
        assert_eq!(
            CyclePath::trace(&grid, (2, 0)),
            Err(CycleError::StartOutside { row: 2, col: 0 })
        );
    }
}
