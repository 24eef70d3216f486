/*
blocks.rs

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

//! Fill the grid with 2×2 unit loops.

use clap::ValueEnum;
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::direction::Direction;
use super::grid::Grid;

/// Rotation of the unit loops.
///
/// All the blocks of a grid share the same orientation, which also selects the corners that the
/// merge step rewires.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum Orientation {
    #[default]
    #[value(name = "cw")]
    Clockwise,
    #[value(name = "ccw")]
    CounterClockwise,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Orientation::Clockwise => write!(f, "clockwise"),
            Orientation::CounterClockwise => write!(f, "counter-clockwise"),
        }
    }
}

impl Orientation {
    /// Pick an orientation with equal probability.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            Orientation::CounterClockwise
        } else {
            Orientation::Clockwise
        }
    }

    /// Whether the loops turn counter-clockwise.
    pub fn is_ccw(self) -> bool {
        self == Orientation::CounterClockwise
    }
}

/// Overwrite every 2×2 block of the grid with a closed loop of four cells.
///
/// The grid size must be even.
pub fn init_blocks(grid: &mut Grid, orientation: Orientation) {
    let size: usize = grid.size();
    debug!("Initializing {0}x{0} grid with {orientation} blocks", size);

    for r in (0..size).step_by(2) {
        for c in (0..size).step_by(2) {
            match orientation {
                Orientation::Clockwise => {
                    grid.set(r, c, Direction::Right);
                    grid.set(r, c + 1, Direction::Down);
                    grid.set(r + 1, c + 1, Direction::Left);
                    grid.set(r + 1, c, Direction::Up);
                }
                Orientation::CounterClockwise => {
                    grid.set(r, c, Direction::Down);
                    grid.set(r + 1, c, Direction::Right);
                    grid.set(r + 1, c + 1, Direction::Up);
                    grid.set(r, c + 1, Direction::Left);
                }
            }
        }
    }
}
