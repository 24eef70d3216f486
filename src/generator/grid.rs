/*
grid.rs

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

//! Grid of successor directions.

use std::fmt;

use super::direction::Direction;

/// Square grid where each cell stores the direction to the next cell of the cycle.
///
/// Cells are addressed by `(row, col)`, row 0 being the top row.
/// A cell is [`None`] until a direction is written into it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    /// Number of rows, which is also the number of columns.
    size: usize,

    /// Directions, row by row.
    cells: Vec<Option<Direction>>,
}

impl Grid {
    /// Create a [`Grid`] object with all the cells unset.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Build a grid from rows of numeric codes (0 for an unset cell).
    ///
    /// Return None if the rows do not form a square or if a code is unknown.
    pub fn from_codes(rows: &[Vec<u8>]) -> Option<Self> {
        let size: usize = rows.len();
        let mut grid: Grid = Grid::new(size);

        for (row, codes) in rows.iter().enumerate() {
            if codes.len() != size {
                return None;
            }
            for (col, code) in codes.iter().enumerate() {
                if *code != 0 {
                    grid.set(row, col, Direction::from_code(*code)?);
                }
            }
        }
        Some(grid)
    }

    /// Resize the grid and unset all its cells.
    pub fn reset(&mut self, size: usize) {
        self.size = size;
        self.cells.clear();
        self.cells.resize(size * size, None);
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Return the direction stored in the cell, or None if the cell is unset or outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<Direction> {
        if row >= self.size || col >= self.size {
            None
        } else {
            self.cells[row * self.size + col]
        }
    }

    /// Store a direction in the cell.
    ///
    /// # Panics
    ///
    /// The method panics if the cell is outside the grid.
    pub fn set(&mut self, row: usize, col: usize, direction: Direction) {
        assert!(
            row < self.size && col < self.size,
            "cell ({row}, {col}) outside the {0}x{0} grid",
            self.size
        );
        self.cells[row * self.size + col] = Some(direction);
    }

    /// Return the cell that follows `(row, col)` in the cycle.
    ///
    /// Return None if the cell is unset or if its direction leaves the grid.
    pub fn next_cell(&self, row: usize, col: usize) -> Option<(usize, usize)> {
        self.get(row, col)?.step(row, col, self.size)
    }

    /// Whether every cell holds a direction.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Return the numeric codes of the grid, row by row (0 for an unset cell).
    pub fn to_codes(&self) -> Vec<Vec<u8>> {
        (0..self.size)
            .map(|row| {
                (0..self.size)
                    .map(|col| self.get(row, col).map_or(0, Direction::code))
                    .collect()
            })
            .collect()
    }

    /// Iterate over the cells, row by row.
    ///
    /// # Example:
    ///
    /// ```
    /// # use dotcirculation::generator::grid::Grid;
    /// let grid = Grid::new(2);
    /// for (row, col, direction) in grid.iter() {
    ///     assert!(row < 2 && col < 2 && direction.is_none());
    /// }
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Option<Direction>)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, d)| (i / self.size, i % self.size, *d))
    }
}

/// One line per row, codes separated by commas.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.to_codes() {
            for code in row {
                write!(f, "{code},")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_unset() {
        let grid = Grid::new(4);
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.len(), 16);
        assert!(!grid.is_complete());
        assert!(grid.iter().all(|(_, _, d)| d.is_none()));
    }

    #[test]
    fn codes_and_display() {
        let mut grid = Grid::new(2);
        grid.set(0, 0, Direction::Right);
        grid.set(0, 1, Direction::Down);
        grid.set(1, 1, Direction::Left);
        assert_eq!(grid.to_codes(), vec![vec![3, 4], vec![0, 1]]);
        assert_eq!(grid.to_string(), "3,4,\n0,1,\n");

        let back = Grid::from_codes(&grid.to_codes()).unwrap();
        assert_eq!(back, grid);
    }

    #[test]
    fn from_codes_rejects_bad_input() {
        assert!(Grid::from_codes(&[vec![1, 2], vec![3]]).is_none());
        assert!(Grid::from_codes(&[vec![1, 9], vec![3, 4]]).is_none());
    }

    #[test]
    fn next_cell_follows_direction() {
        let mut grid = Grid::new(2);
        grid.set(0, 0, Direction::Right);
        grid.set(1, 0, Direction::Left);
        assert_eq!(grid.next_cell(0, 0), Some((0, 1)));
        assert_eq!(grid.next_cell(1, 0), None);
        assert_eq!(grid.next_cell(0, 1), None);
    }

    #[test]
    fn reset_resizes() {
        let mut grid = Grid::new(2);
        grid.set(1, 1, Direction::Up);
        grid.reset(6);
        assert_eq!(grid.len(), 36);
        assert_eq!(grid.get(1, 1), None);
    }
}
