/*
generator.rs

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

//! Generate random Hamiltonian cycles on square grids.
//!
//! A generated cycle is stored in a [`grid::Grid`] object: each cell holds the
//! [`direction::Direction`] of the next cell of the cycle.
//! Following the directions from any cell visits all the cells once and comes back to the start.
//!
//! The generation runs in three steps:
//!
//! * The grid is split into 2×2 blocks, and [`blocks::init_blocks`] writes a closed loop of four
//!   cells into every block.
//!   All the loops turn in the same [`blocks::Orientation`].
//!
//! * A random spanning tree of the blocks is built with [`spanning_tree::WilsonTree`].
//!   The tree is drawn uniformly among all the spanning trees of the block grid.
//!
//! * For each tree edge, [`merge::merge_blocks`] rewires two cells at the border of the two
//!   blocks, which joins their loops.
//!   After the last edge, a single loop remains.
//!
//! [`hamiltonian_cycle::HamiltonianCycle`] runs these steps.
//! For a one-shot grid, use [`generate_cycle`].
//! [`cycle::CyclePath`] follows the directions of a grid and verifies that they form a single
//! cycle.

pub mod blocks;
pub mod cycle;
pub mod direction;
pub mod grid;
pub mod hamiltonian_cycle;
pub mod merge;
pub mod spanning_tree;

pub use hamiltonian_cycle::{GridSizeError, generate_cycle};
