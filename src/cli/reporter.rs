// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI output reporter with colored formatting

use crate::grid::Grid;
use colored::*;
use std::time::Duration;

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// Report a rendered image
    pub fn report_render(
        expression: &str,
        grid: &Grid,
        output: &str,
        tile_side: u32,
        duration: Duration,
    ) {
        println!("\n{}", "━".repeat(80).bright_black());
        println!("{} {}", "Rendered:".bold(), output.cyan());
        println!("{}", "━".repeat(80).bright_black());
        println!("  {} {}", "Expression:".bright_black(), expression);
        println!(
            "  {} {}",
            "Grid:".bright_black(),
            grid.dimensions().to_string().cyan()
        );
        println!(
            "  {} {}",
            "Pixels:".bright_black(),
            format!(
                "{}x{}",
                grid.width() * tile_side as usize,
                grid.height() * tile_side as usize
            )
            .cyan()
        );
        println!(
            "  {} {}",
            "Time:".bright_black(),
            Self::format_duration(duration).yellow()
        );
        println!("{}", "━".repeat(80).bright_black());
    }

    /// Report an evaluated grid as a glyph matrix
    pub fn report_grid(expression: &str, grid: &Grid) {
        println!("{} {}", "Expression:".bold(), expression);
        println!("{} {}", "Grid:".bold(), grid.dimensions().to_string().cyan());
        for line in grid.to_string().lines() {
            println!("  {}", line);
        }
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("\n{} {}", "❌ Error:".red().bold(), message);
    }

    /// Report info
    pub fn report_info(message: &str) {
        println!("{} {}", "ℹ️".bright_blue(), message);
    }

    /// Format duration for display
    fn format_duration(duration: Duration) -> String {
        let micros = duration.as_micros();

        if micros < 1_000 {
            format!("{}µs", micros)
        } else if micros < 1_000_000 {
            format!("{:.2}ms", micros as f64 / 1_000.0)
        } else {
            format!("{:.2}s", micros as f64 / 1_000_000.0)
        }
    }

    /// Print success message
    pub fn success(message: &str) {
        println!("{} {}", "✅".green(), message.green());
    }
}
