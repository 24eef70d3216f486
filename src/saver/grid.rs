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

//! Save and restore generated grids.
//!
//! The saved object is a serialization of the [`GridExport`] object in JSON format by using
//! [`serde`].
//! Directions are stored as their numeric codes: 1 for left, 2 for up, 3 for right, and 4 for
//! down.

use chrono::Local;
use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::{File, remove_file};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use crate::generator::blocks::Orientation;
use crate::generator::grid::Grid;

/// Generated grid and its parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GridExport {
    /// Number of rows and columns.
    pub size: usize,

    /// Orientation of the unit loops used for the generation.
    pub orientation: Orientation,

    /// Seed of the random generator, if one was provided.
    pub seed: Option<u64>,

    /// Generation time, in RFC 3339 format.
    pub generated: String,

    /// Direction codes, row by row.
    pub rows: Vec<Vec<u8>>,
}

impl GridExport {
    /// Create a [`GridExport`] object for the provided grid, time-stamped now.
    pub fn new(grid: &Grid, orientation: Orientation, seed: Option<u64>) -> Self {
        Self {
            size: grid.size(),
            orientation,
            seed,
            generated: Local::now().to_rfc3339(),
            rows: grid.to_codes(),
        }
    }

    /// Rebuild the [`Grid`] object, or return None if the rows are not a valid square of codes.
    pub fn to_grid(&self) -> Option<Grid> {
        let grid: Grid = Grid::from_codes(&self.rows)?;
        if grid.size() != self.size {
            return None;
        }
        Some(grid)
    }
}

/// Object to save and restore a grid.
pub struct SaverGrid {
    /// Path to the save file.
    save_file: PathBuf,
}

impl SaverGrid {
    /// Create a [`SaverGrid`] object for the provided file.
    pub fn new(save_file: PathBuf) -> Self {
        debug!("Grid file: {save_file:?}");
        Self { save_file }
    }

    /// Retrieve the [`GridExport`] object from the file.
    ///
    /// Return None if the file does not exist.
    pub fn get_grid(&self) -> Result<Option<GridExport>, Box<dyn Error>> {
        let file: File;
        match File::open(&self.save_file) {
            Ok(f) => file = f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        }
        let reader: BufReader<File> = BufReader::new(file);
        let export: GridExport = serde_json::from_reader(reader)?;
        Ok(Some(export))
    }

    /// Save the provided [`GridExport`] object.
    pub fn save_grid(&self, export: &GridExport) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, export)?;
        writer.flush()?;
        Ok(())
    }

    /// Delete the file.
    pub fn delete_save(&self) {
        let _ = remove_file(&self.save_file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::hamiltonian_cycle::HamiltonianCycle;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::env;

    #[test]
    fn save_and_restore() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut cycle = HamiltonianCycle::new(6).unwrap();
        cycle.generate_with_rng(&mut rng, Some(Orientation::CounterClockwise));
        let export = GridExport::new(cycle.grid(), cycle.orientation, Some(21));

        let mut path = env::temp_dir();
        path.push(format!("dotcirculation-saver-{}.json", std::process::id()));
        let saver = SaverGrid::new(path);
        saver.save_grid(&export).unwrap();

        let restored = saver.get_grid().unwrap().unwrap();
        assert_eq!(restored, export);
        assert_eq!(restored.to_grid().as_ref(), Some(cycle.grid()));

        saver.delete_save();
        assert!(saver.get_grid().unwrap().is_none());
    }

    #[test]
    fn invalid_rows_do_not_make_a_grid() {
        let export = GridExport {
            size: 2,
            orientation: Orientation::Clockwise,
            seed: None,
            generated: String::new(),
            rows: vec![vec![3, 4], vec![2, 7]],
        };
        assert!(export.to_grid().is_none());
    }
}
