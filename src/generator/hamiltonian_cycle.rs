/*
hamiltonian_cycle.rs

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

//! Generate a random Hamiltonian cycle on a square grid.

use log::debug;
use rand::Rng;
use std::error::Error;
use std::fmt;
use std::time::Instant;

use super::blocks::{self, Orientation};
use super::grid::Grid;
use super::merge;
use super::spanning_tree::WilsonTree;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum GridSizeError {
    /// The grid must be at least 2×2.
    TooSmall(usize),

    /// The number of cells does not fit in memory addresses.
    TooLarge(usize),
}

impl fmt::Display for GridSizeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GridSizeError::TooSmall(n) => write!(f, "invalid grid size {n}: must be at least 2"),
            GridSizeError::TooLarge(n) => write!(f, "invalid grid size {n}: too many cells"),
        }
    }
}

impl Error for GridSizeError {}

/// Return the size actually used for a requested grid size. Odd sizes are rounded up.
///
/// # Errors
///
/// The function returns an error for sizes below 2 or for sizes with too many cells.
pub fn normalize_size(n: usize) -> Result<usize, GridSizeError> {
    if n < 2 {
        return Err(GridSizeError::TooSmall(n));
    }
    let size: usize = if n % 2 == 0 {
        n
    } else {
        n.checked_add(1).ok_or(GridSizeError::TooLarge(n))?
    };
    match size.checked_mul(size) {
        Some(cells) if cells <= isize::MAX as usize => Ok(size),
        _ => Err(GridSizeError::TooLarge(n)),
    }
}

/// [`HamiltonianCycle`] object.
pub struct HamiltonianCycle {
    /// Grid size (even).
    pub size: usize,

    /// Orientation of the unit loops for the last generated grid.
    pub orientation: Orientation,

    /// Number of block merges for the last generated grid.
    pub merges: usize,

    /// Number of random steps the spanning tree walks took for the last generated grid.
    pub walk_steps: usize,

    /// Duration in seconds it took to generate the last grid.
    pub duration: f32,

    /// Last generated grid.
    grid: Grid,

    /// Spanning tree builder for the coarse grid, kept between generations to reuse its arrays.
    tree: WilsonTree,
}

impl HamiltonianCycle {
    /// Create the object for an `n`×`n` grid. An odd `n` is rounded up to the next even value.
    pub fn new(n: usize) -> Result<Self, GridSizeError> {
        let size: usize = normalize_size(n)?;
        if size != n {
            debug!("Grid size {n} rounded up to {size}");
        }
        Ok(Self {
            size,
            orientation: Orientation::default(),
            merges: 0,
            walk_steps: 0,
            duration: 0.0,
            grid: Grid::new(size),
            tree: WilsonTree::new(size / 2, size / 2),
        })
    }

    /// Generate a new cycle with the thread random generator and return the grid.
    pub fn generate(&mut self) -> &Grid {
        self.generate_with_rng(&mut rand::rng(), None)
    }

    /// Generate a new cycle and return the grid.
    ///
    /// If `orientation` is None, then the orientation of the unit loops is chosen randomly.
    /// With a seeded random generator and a fixed orientation, the result is reproducible.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        orientation: Option<Orientation>,
    ) -> &Grid {
        let start: Instant = Instant::now();

        self.orientation = match orientation {
            Some(o) => o,
            None => Orientation::random(rng),
        };
        self.merges = 0;

        // Unit loops in every 2x2 block
        self.grid.reset(self.size);
        blocks::init_blocks(&mut self.grid, self.orientation);

        // Join the loops along the edges of a random spanning tree of the blocks
        let grid: &mut Grid = &mut self.grid;
        let orientation: Orientation = self.orientation;
        let mut merges: usize = 0;
        self.tree.build(rng, |from, to| {
            merge::merge_blocks(grid, orientation, from, to);
            merges += 1;
        });
        self.merges = merges;
        self.walk_steps = self.tree.walk_steps;

        self.duration = start.elapsed().as_secs_f32();
        debug!(
            "Grid {0}x{0}  Orientation = {1}  Merges = {2}  Steps = {3}  Duration = {4}",
            self.size, self.orientation, self.merges, self.walk_steps, self.duration
        );
        &self.grid
    }

    /// Return the last generated grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Consume the object and return the last generated grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

/// Generate an `n`×`n` grid holding a random Hamiltonian cycle.
///
/// An odd `n` is rounded up to the next even value.
///
/// # Errors
///
/// The function returns an error if `n` is less than 2.
pub fn generate_cycle(n: usize) -> Result<Grid, GridSizeError> {
    let mut cycle: HamiltonianCycle = HamiltonianCycle::new(n)?;
    cycle.generate();
    Ok(cycle.into_grid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::cycle::CyclePath;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn size_normalization() {
        assert_eq!(normalize_size(0), Err(GridSizeError::TooSmall(0)));
        assert_eq!(normalize_size(1), Err(GridSizeError::TooSmall(1)));
        assert_eq!(normalize_size(2), Ok(2));
        assert_eq!(normalize_size(3), Ok(4));
        assert_eq!(normalize_size(24), Ok(24));
        assert_eq!(normalize_size(usize::MAX), Err(GridSizeError::TooLarge(usize::MAX)));
        assert_eq!(
            normalize_size(1 << (usize::BITS / 2)),
            Err(GridSizeError::TooLarge(1 << (usize::BITS / 2)))
        );
    }

    #[test]
    fn merge_count_matches_tree() {
        let mut rng = StdRng::seed_from_u64(5);
        for n in [2, 4, 6, 10] {
            let mut cycle = HamiltonianCycle::new(n).unwrap();
            cycle.generate_with_rng(&mut rng, None);
            assert_eq!(cycle.merges, (n / 2) * (n / 2) - 1);
            assert!(CyclePath::verify(cycle.grid()).is_ok());
        }
    }

    #[test]
    fn forced_orientation_is_used() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut cycle = HamiltonianCycle::new(8).unwrap();
        for orientation in [Orientation::Clockwise, Orientation::CounterClockwise] {
            cycle.generate_with_rng(&mut rng, Some(orientation));
            assert_eq!(cycle.orientation, orientation);
            assert!(CyclePath::verify(cycle.grid()).is_ok());
        }
    }

    #[test]
    fn regenerating_reuses_the_object() {
        let mut cycle = HamiltonianCycle::new(12).unwrap();
        for _ in 0..5 {
            let grid = cycle.generate();
            assert_eq!(grid.size(), 12);
            assert!(CyclePath::verify(grid).is_ok());
        }
    }
}
