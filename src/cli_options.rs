/*
cli_options.rs

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

//! Process command-line options.
//!
//! The command generates random Hamiltonian cycles and prints their direction grids.
//! Each grid is printed one row per line, with the codes 1 (left), 2 (up), 3 (right), and
//! 4 (down), followed by a separator line.
//!
//! # Examples
//!
//! Generate a 4×4 grid:
//!
//! ```text
//! $ dotcirculation -n 4
//! 3,4,3,4,
//! 2,1,4,2,
//! 3,4,3,2,
//! 2,1,1,1,
//!
//! ----------
//! ```
//!
//! Generate 100 grids of the default size, check them, and print some statistics:
//!
//! ```text
//! $ dotcirculation -c 100 -q -s
//! ```

use clap::Parser;
use log::{debug, error};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;
use std::path::PathBuf;

use dotcirculation::config::{COPYRIGHT_NOTICE, DEFAULT_GRID_SIZE};
use dotcirculation::generator::blocks::Orientation;
use dotcirculation::generator::cycle::CyclePath;
use dotcirculation::generator::hamiltonian_cycle::HamiltonianCycle;
use dotcirculation::saver::grid::{GridExport, SaverGrid};
use dotcirculation::saver::html::SaverHtml;

/// Generate random Hamiltonian cycles on square grids.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Grid size (odd values are rounded up)
    #[arg(short = 'n', long, default_value_t = DEFAULT_GRID_SIZE)]
    size: usize,

    /// Number of grids to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Seed for the random generator
    #[arg(long)]
    seed: Option<u64>,

    /// Orientation of the unit loops (random by default)
    #[arg(value_enum, short, long)]
    orientation: Option<Orientation>,

    /// Save the last grid in JSON format
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Save a drawing of the last grid in an HTML page
    #[arg(long, value_name = "FILE")]
    html: Option<PathBuf>,

    /// Do not print the grids
    #[arg(short, long, default_value_t = false)]
    quiet: bool,

    /// Print some statistics after generating the grids
    #[arg(short, long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options, and return the exit status.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let mut cycle: HamiltonianCycle = match HamiltonianCycle::new(args.size) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            return 2;
        }
    };

    // A seed makes the whole run reproducible, otherwise use the thread generator
    let mut rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;
    let mut steps: usize = 0;
    for i in 0..args.count {
        debug!("Iteration {i}");

        let grid = cycle.generate_with_rng(&mut rng, args.orientation);

        // Verify that the directions form one cycle through all the cells
        if let Err(e) = CyclePath::verify(grid) {
            error!("Invalid grid: {e}");
            eprintln!("{grid}");
            eprintln!("Bug: the generated grid is not a single cycle ({e})");
            return 1;
        }

        if !args.quiet {
            println!("{grid}");
            println!("----------");
        }

        total += cycle.duration;
        if cycle.duration > max {
            max = cycle.duration;
        }
        steps += cycle.walk_steps;
    }

    if args.count > 0 {
        if let Some(path) = args.json {
            let export: GridExport = GridExport::new(cycle.grid(), cycle.orientation, args.seed);
            if let Err(e) = SaverGrid::new(path).save_grid(&export) {
                eprintln!("Error: cannot save the JSON file: {e}");
                return 1;
            }
        }
        if let Some(path) = args.html {
            if let Err(e) = SaverHtml::new(path).save_grid(cycle.grid()) {
                eprintln!("Error: cannot save the HTML file: {e}");
                return 1;
            }
        }
    }

    // Print some stats
    if args.summary && args.count > 0 {
        println!(
            "
         grid size = {0}x{0}
        total time = {1}s
      average time = {2}s
          max time = {3}s
     average steps = {4}",
            cycle.size,
            total,
            total / args.count as f32,
            max,
            steps / args.count
        );
    }
    0
}
