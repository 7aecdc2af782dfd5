// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Patchwork CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use patchwork::cli::Reporter;
use patchwork::{ast, io, Evaluator, Node, RenderConfig, TileSize};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "patchwork")]
#[command(about = "Patchwork - compose square and triangle tiles and render them", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Expression file; reads standard input until end-of-input when omitted
    #[arg(short, long, value_name = "FILE", global = true)]
    input: Option<PathBuf>,

    /// Output image (format follows the extension, .ppm by default)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Tile side in pixels (4, 15, 32 or 64)
    #[arg(short, long, value_parser = parse_tile_size)]
    tile_size: Option<TileSize>,

    /// Reference bitmap for squares
    #[arg(long, value_name = "FILE", requires = "triangle")]
    square: Option<PathBuf>,

    /// Reference bitmap for triangles
    #[arg(long, value_name = "FILE", requires = "square")]
    triangle: Option<PathBuf>,

    /// Configuration file (defaults to ./patchwork.toml when present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse an expression and print its normalized form
    Parse {
        /// Also print the tree as JSON
        #[arg(long)]
        json: bool,
    },

    /// Evaluate an expression and print the grid
    Eval,

    /// Show version information
    Version,
}

fn parse_tile_size(value: &str) -> Result<TileSize, String> {
    let pixels: u32 = value
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    TileSize::try_from(pixels).map_err(|err| err.to_string())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(&cli) {
        Reporter::report_error(&format!("{:#}", err));
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Some(Commands::Parse { json }) => parse_command(cli.input.as_deref(), *json),
        Some(Commands::Eval) => eval_command(cli.input.as_deref()),
        Some(Commands::Version) => {
            println!("Patchwork v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        None => render_command(cli),
    }
}

fn read_source(input: Option<&Path>) -> Result<Node> {
    match input {
        Some(path) => io::import_expression_file(path),
        None => {
            let stdin = std::io::stdin();
            if stdin.is_terminal() {
                eprintln!("Enter an expression, then end-of-input (Ctrl-D):");
            }
            io::read_expression(stdin.lock())
        }
    }
}

fn render_command(cli: &Cli) -> Result<()> {
    let mut config = RenderConfig::load(cli.config.as_deref())?;
    if let Some(tile_size) = cli.tile_size {
        config.tile_size = tile_size;
    }
    if let (Some(square), Some(triangle)) = (&cli.square, &cli.triangle) {
        config.square = Some(square.clone());
        config.triangle = Some(triangle.clone());
    }
    if let Some(output) = &cli.output {
        config.output = output.clone();
    }

    let ast = read_source(cli.input.as_deref())?;
    let expression = ast.to_string();

    let start = std::time::Instant::now();
    let grid = Evaluator::new().evaluate(&ast);
    let released = ast::release(Some(ast));
    log::debug!("released {} nodes", released);
    let grid = grid?;

    let tiles = config.tiles()?;
    let image = io::render(&grid, &tiles)?;
    io::export_image(&image, &config.output)
        .with_context(|| format!("Failed to write {}", config.output.display()))?;
    let duration = start.elapsed();

    if cli.verbose {
        Reporter::report_render(
            &expression,
            &grid,
            &config.output.display().to_string(),
            tiles.side(),
            duration,
        );
    } else {
        Reporter::success(&format!(
            "Rendered {} -> {}",
            expression,
            config.output.display()
        ));
    }

    Ok(())
}

fn parse_command(input: Option<&Path>, json: bool) -> Result<()> {
    let ast = read_source(input)?;

    println!("{}", ast);
    if json {
        println!("{}", serde_json::to_string_pretty(&ast)?);
    }
    Reporter::report_info(&format!(
        "{} nodes, depth {}",
        ast.node_count(),
        ast.depth()
    ));

    ast::release(Some(ast));
    Ok(())
}

fn eval_command(input: Option<&Path>) -> Result<()> {
    let ast = read_source(input)?;

    let grid = Evaluator::new().evaluate(&ast);
    let expression = ast.to_string();
    ast::release(Some(ast));

    Reporter::report_grid(&expression, &grid?);
    Ok(())
}
