/*
html.rs

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

//! Draw a grid as an SVG picture embedded in an HTML page.

use log::debug;
use std::error::Error;
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::config::{SVG_COLOR, SVG_MARGIN, SVG_SIZE};
use crate::generator::grid::Grid;

/// Return the SVG drawing of the grid.
///
/// Each cell is drawn as a dot with a segment toward the next cell of the cycle.
/// Unset cells are skipped.
pub fn svg(grid: &Grid) -> String {
    let mut s: String = String::new();
    let _ = write!(
        s,
        r#"<svg width="{SVG_SIZE}" height="{SVG_SIZE}" xmlns="http://www.w3.org/2000/svg">"#
    );
    if grid.is_empty() {
        s.push_str("</svg>");
        return s;
    }

    let cell_size: f64 = (SVG_SIZE - 2.0 * SVG_MARGIN) / grid.size() as f64;
    let width: f64 = (cell_size * 0.1).max(1.0);

    for (row, col, direction) in grid.iter() {
        let Some(direction) = direction else {
            continue;
        };
        let (dr, dc) = direction.offset();
        let x1: f64 = SVG_MARGIN + col as f64 * cell_size + cell_size / 2.0;
        let y1: f64 = SVG_MARGIN + row as f64 * cell_size + cell_size / 2.0;
        let x2: f64 = x1 + dc as f64 * cell_size;
        let y2: f64 = y1 + dr as f64 * cell_size;

        let _ = write!(
            s,
            r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{SVG_COLOR}" stroke-width="{width}" />"#
        );
        let _ = write!(
            s,
            r#"<circle cx="{x1}" cy="{y1}" r="{width}" fill="{SVG_COLOR}" />"#
        );
    }
    s.push_str("</svg>");
    s
}

/// Return the HTML page showing the grid.
pub fn html(grid: &Grid) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Hamiltonian Cycle {0}x{0}</title>
    <style>
        body {{ font-family: sans-serif; text-align: center; padding: 0; margin: 0; }}
        h1 {{ margin: 10px; }}
        svg {{ border: 1px solid #ccc; background: #f9f9f9; }}
    </style>
</head>
<body>
    <h1>Hamiltonian Cycle ({0}x{0})</h1>
    {1}
</body>
</html>
"#,
        grid.size(),
        svg(grid)
    )
}

/// Object to write the HTML drawing of a grid.
pub struct SaverHtml {
    /// Path to the HTML file.
    save_file: PathBuf,
}

impl SaverHtml {
    /// Create a [`SaverHtml`] object for the provided file.
    pub fn new(save_file: PathBuf) -> Self {
        debug!("HTML file: {save_file:?}");
        Self { save_file }
    }

    /// Write the HTML page for the provided grid.
    pub fn save_grid(&self, grid: &Grid) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        writer.write_all(html(grid).as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}
