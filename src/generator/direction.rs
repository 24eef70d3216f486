/*
direction.rs

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

//! Directions stored in the grid cells.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

/// Direction to the next cell of the cycle.
///
/// The numeric values are the codes used in the text and JSON exports.
/// Rows grow downward: [`Direction::Up`] moves to the previous row, [`Direction::Down`] to the
/// next one.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr)]
#[repr(u8)]
pub enum Direction {
    Left = 1,
    Up = 2,
    Right = 3,
    Down = 4,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Up => write!(f, "up"),
            Direction::Right => write!(f, "right"),
            Direction::Down => write!(f, "down"),
        }
    }
}

impl Direction {
    /// All the directions, in code order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    /// Numeric code of the direction (1 to 4).
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Direction for the given numeric code, or None if the code is not valid.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::from_repr(code)
    }

    /// Row and column offsets of the direction.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Left => (0, -1),
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
        }
    }

    /// Direction pointing the other way.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
        }
    }

    /// Return the cell reached by moving from `(row, col)` in that direction, or None if the move
    /// leaves a `size`×`size` grid.
    pub fn step(self, row: usize, col: usize, size: usize) -> Option<(usize, usize)> {
        let (dr, dc) = self.offset();
        let r: usize = row.checked_add_signed(dr)?;
        let c: usize = col.checked_add_signed(dc)?;
        if r < size && c < size {
            Some((r, c))
        } else {
            None
        }
    }
}
