/*
spanning_tree.rs

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

//! Uniform spanning tree of the coarse grid, built with Wilson's algorithm.
//!
//! Each coarse cell stands for a 2×2 block of the fine grid.
//! The tree is grown by loop-erased random walks: a walk starts from a cell outside the tree and
//! wanders until it hits the tree.
//! For each visited cell only the last step is remembered, which erases the loops of the walk.
//! Replaying the walk from its start then gives a simple path that is added to the tree.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Cell of the coarse grid.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct CoarseCell {
    pub row: usize,
    pub col: usize,
}

impl CoarseCell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Tree edge, from a cell to the next cell of the walk that connected it to the tree.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct TreeEdge {
    pub from: CoarseCell,
    pub to: CoarseCell,
}

/// [`WilsonTree`] object.
pub struct WilsonTree {
    /// Number of rows in the coarse grid.
    pub rows: usize,

    /// Number of columns in the coarse grid.
    pub cols: usize,

    /// Number of random steps taken while building the last tree.
    pub walk_steps: usize,

    /// Number of walks it took to build the last tree.
    pub walks: usize,

    /// Whether the cell is already connected to the tree.
    in_tree: Vec<bool>,

    /// For each cell visited by the current walk, index of the cell the walk moved to last.
    /// Entries from previous walks are never read: the replay only reaches cells written by the
    /// current walk.
    next_hop: Vec<usize>,
}

impl WilsonTree {
    /// Create the object for a `rows`×`cols` coarse grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            walk_steps: 0,
            walks: 0,
            in_tree: vec![false; rows * cols],
            next_hop: vec![0; rows * cols],
        }
    }

    fn index(&self, cell: CoarseCell) -> usize {
        cell.row * self.cols + cell.col
    }

    fn cell(&self, index: usize) -> CoarseCell {
        CoarseCell::new(index / self.cols, index % self.cols)
    }

    /// Pick a random 4-neighbor of the cell. Positions outside the grid are not candidates.
    fn random_neighbor<R: Rng + ?Sized>(&self, index: usize, rng: &mut R) -> usize {
        let (row, col) = (index / self.cols, index % self.cols);
        let mut candidates: [usize; 4] = [0; 4];
        let mut count: usize = 0;

        if row > 0 {
            candidates[count] = index - self.cols;
            count += 1;
        }
        if row + 1 < self.rows {
            candidates[count] = index + self.cols;
            count += 1;
        }
        if col > 0 {
            candidates[count] = index - 1;
            count += 1;
        }
        if col + 1 < self.cols {
            candidates[count] = index + 1;
            count += 1;
        }
        candidates[rng.random_range(0..count)]
    }

    /// Build a random spanning tree and call `on_edge` for each edge, in discovery order.
    ///
    /// The tree has `rows * cols - 1` edges. A grid with a single cell produces no edge.
    pub fn build<R, F>(&mut self, rng: &mut R, mut on_edge: F)
    where
        R: Rng + ?Sized,
        F: FnMut(CoarseCell, CoarseCell),
    {
        let num_cells: usize = self.rows * self.cols;
        self.walk_steps = 0;
        self.walks = 0;
        self.in_tree.clear();
        self.in_tree.resize(num_cells, false);
        self.next_hop.clear();
        self.next_hop.resize(num_cells, 0);
        if num_cells == 0 {
            return;
        }

        let root: usize = rng.random_range(0..num_cells);
        self.in_tree[root] = true;
        let mut remaining: usize = num_cells - 1;
        debug!(
            "Coarse grid {}x{}, root = {:?}",
            self.rows,
            self.cols,
            self.cell(root)
        );

        while remaining > 0 {
            // Start from a random cell outside the tree
            let start: usize = loop {
                let i: usize = rng.random_range(0..num_cells);
                if !self.in_tree[i] {
                    break i;
                }
            };
            self.walks += 1;

            // Walk until the tree is reached, keeping only the last exit of each cell
            let mut u: usize = start;
            while !self.in_tree[u] {
                let next: usize = self.random_neighbor(u, rng);
                self.next_hop[u] = next;
                u = next;
                self.walk_steps += 1;
            }

            // Replay the loop-erased walk and graft it to the tree
            u = start;
            while !self.in_tree[u] {
                self.in_tree[u] = true;
                remaining -= 1;
                let next: usize = self.next_hop[u];
                on_edge(self.cell(u), self.cell(next));
                u = next;
            }
        }
        debug!("Walks = {}  Steps = {}", self.walks, self.walk_steps);
    }

    /// Build a random spanning tree and return its edges in discovery order.
    pub fn edges<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<TreeEdge> {
        let mut edges: Vec<TreeEdge> =
            Vec::with_capacity((self.rows * self.cols).saturating_sub(1));
        self.build(rng, |from, to| edges.push(TreeEdge { from, to }));
        edges
    }
}

/// Whether the edges form a spanning tree of the `rows`×`cols` coarse grid.
///
/// Every edge must join two 4-adjacent cells of the grid, the edge count must be one less than
/// the cell count, and no edge may close a cycle.
pub fn is_spanning_tree(rows: usize, cols: usize, edges: &[TreeEdge]) -> bool {
    let num_cells: usize = rows * cols;
    if num_cells == 0 || edges.len() != num_cells - 1 {
        return false;
    }

    // Union-find over the cell indexes
    let mut parent: Vec<usize> = (0..num_cells).collect();
    fn find(parent: &mut [usize], mut i: usize) -> usize {
        while parent[i] != i {
            parent[i] = parent[parent[i]];
            i = parent[i];
        }
        i
    }

    for edge in edges {
        let (a, b) = (edge.from, edge.to);
        if a.row >= rows || a.col >= cols || b.row >= rows || b.col >= cols {
            return false;
        }
        if a.row.abs_diff(b.row) + a.col.abs_diff(b.col) != 1 {
            return false;
        }
        let ra: usize = find(&mut parent, a.row * cols + a.col);
        let rb: usize = find(&mut parent, b.row * cols + b.col);
        if ra == rb {
            return false;
        }
        parent[ra] = rb;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn single_cell_has_no_edge() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut tree = WilsonTree::new(1, 1);
        assert!(tree.edges(&mut rng).is_empty());
        assert_eq!(tree.walks, 0);
    }

    #[test]
    fn builds_spanning_trees() {
        let mut rng = StdRng::seed_from_u64(42);
        for (rows, cols) in [(1, 2), (2, 1), (2, 2), (3, 5), (12, 12)] {
            let mut tree = WilsonTree::new(rows, cols);
            for _ in 0..20 {
                let edges = tree.edges(&mut rng);
                assert_eq!(edges.len(), rows * cols - 1);
                assert!(is_spanning_tree(rows, cols, &edges), "{rows}x{cols}: {edges:?}");
            }
        }
    }

    #[test]
    fn each_cell_is_grafted_once() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut tree = WilsonTree::new(6, 6);
        let edges = tree.edges(&mut rng);
        let mut seen = vec![false; 36];
        for e in &edges {
            let i = e.from.row * 6 + e.from.col;
            assert!(!seen[i], "cell {:?} emitted twice", e.from);
            seen[i] = true;
        }
        assert_eq!(seen.iter().filter(|s| !**s).count(), 1);
    }

    #[test]
    fn same_seed_same_tree() {
        let a = WilsonTree::new(5, 5).edges(&mut StdRng::seed_from_u64(9));
        let b = WilsonTree::new(5, 5).edges(&mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn all_trees_of_the_square_appear() {
        // The 2x2 coarse grid is a 4-cycle: it has four spanning trees, each missing one side.
        let mut rng = StdRng::seed_from_u64(11);
        let mut tree = WilsonTree::new(2, 2);
        let mut missing_side_count = [0usize; 4];
        let sides = [
            (CoarseCell::new(0, 0), CoarseCell::new(0, 1)),
            (CoarseCell::new(0, 1), CoarseCell::new(1, 1)),
            (CoarseCell::new(1, 1), CoarseCell::new(1, 0)),
            (CoarseCell::new(1, 0), CoarseCell::new(0, 0)),
        ];
        for _ in 0..4000 {
            let edges = tree.edges(&mut rng);
            let has = |a: CoarseCell, b: CoarseCell| {
                edges
                    .iter()
                    .any(|e| (e.from == a && e.to == b) || (e.from == b && e.to == a))
            };
            let missing: Vec<usize> = (0..4).filter(|i| !has(sides[*i].0, sides[*i].1)).collect();
            assert_eq!(missing.len(), 1);
            missing_side_count[missing[0]] += 1;
        }
        for count in missing_side_count {
            assert!((800..1200).contains(&count), "{missing_side_count:?}");
        }
    }

    #[test]
    fn rejects_non_trees() {
        let c = CoarseCell::new;
        let cycle = [
            TreeEdge { from: c(0, 0), to: c(0, 1) },
            TreeEdge { from: c(0, 1), to: c(1, 1) },
            TreeEdge { from: c(1, 1), to: c(0, 1) },
        ];
        assert!(!is_spanning_tree(2, 2, &cycle));

        let diagonal = [
            TreeEdge { from: c(0, 0), to: c(1, 1) },
            TreeEdge { from: c(0, 1), to: c(1, 1) },
            TreeEdge { from: c(1, 0), to: c(1, 1) },
        ];
        assert!(!is_spanning_tree(2, 2, &diagonal));
        assert!(!is_spanning_tree(2, 2, &diagonal[..2]));
    }
}
