/*
config.rs

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

//! Build-time settings.

/// Grid size used when none is given on the command line.
pub const DEFAULT_GRID_SIZE: usize = 24;

/// Width and height of the SVG drawing, in pixels.
pub const SVG_SIZE: f64 = 800.0;

/// Margin around the grid in the SVG drawing, in pixels.
pub const SVG_MARGIN: f64 = 20.0;

/// Color of the cycle in the SVG drawing.
pub const SVG_COLOR: &str = "#007bff";

pub const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "
Copyright 2025 Hervé Quatremain
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law."
);
