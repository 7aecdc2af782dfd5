// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Integration tests for expression evaluation

use patchwork::ast::release;
use patchwork::grid::{juxtapose, rotate, superpose, Dimensions};
use patchwork::{
    evaluate, parse_expression, Cell, Evaluator, Grid, Orientation, PatchworkError, PrimitiveKind,
};

fn cell(kind: PrimitiveKind, orientation: Orientation) -> Cell {
    Cell::new(kind, orientation)
}

fn init_logging() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// Parse, check the display round-trips, evaluate, release
fn run(source: &str) -> Grid {
    init_logging();
    let ast = parse_expression(source).expect("expression should parse");
    assert_eq!(ast.to_string(), source);
    let grid = Evaluator::new()
        .evaluate(&ast)
        .expect("expression should evaluate");
    assert_eq!(release(Some(ast)), source.matches(|c| c == '[' || c == ',').count() + 1);
    grid
}

#[test]
fn test_single_triangle() {
    let grid = run("triangle");
    assert_eq!(grid.dimensions(), Dimensions { height: 1, width: 1 });
    assert_eq!(
        grid.cells(),
        &[cell(PrimitiveKind::Triangle, Orientation::East)]
    );
}

#[test]
fn test_rotated_triangle() {
    let grid = run("ROT[triangle]");
    assert_eq!(grid.dimensions(), Dimensions { height: 1, width: 1 });
    assert_eq!(
        grid.cells(),
        &[cell(PrimitiveKind::Triangle, Orientation::North)]
    );
}

#[test]
fn test_two_squares_side_by_side() {
    let grid = run("JUXT[carre, carre]");
    assert_eq!(grid.dimensions(), Dimensions { height: 1, width: 2 });
    assert!(grid
        .cells()
        .iter()
        .all(|c| *c == cell(PrimitiveKind::Square, Orientation::East)));
}

#[test]
fn test_two_by_two_squares() {
    let grid = run("SUPER[JUXT[carre, carre], JUXT[carre, carre]]");
    assert_eq!(grid.dimensions(), Dimensions { height: 2, width: 2 });
    assert_eq!(grid.cells().len(), 4);
    assert!(grid
        .cells()
        .iter()
        .all(|c| *c == cell(PrimitiveKind::Square, Orientation::East)));
}

#[test]
fn test_rotated_square_beside_triangle() {
    let grid = run("JUXT[ROT[carre], triangle]");
    assert_eq!(grid.dimensions(), Dimensions { height: 1, width: 2 });
    assert_eq!(
        grid.cells(),
        &[
            cell(PrimitiveKind::Square, Orientation::North),
            cell(PrimitiveKind::Triangle, Orientation::East),
        ]
    );
}

#[test]
fn test_rotation_of_composite() {
    // a 1x2 row turned a quarter becomes a 2x1 column read from the right
    let grid = run("ROT[JUXT[carre, triangle]]");
    assert_eq!(grid.dimensions(), Dimensions { height: 2, width: 1 });
    assert_eq!(
        grid.cells(),
        &[
            cell(PrimitiveKind::Triangle, Orientation::North),
            cell(PrimitiveKind::Square, Orientation::North),
        ]
    );
}

#[test]
fn test_rotation_fixes_dimensions_for_merge() {
    let grid = run("JUXT[ROT[JUXT[carre, carre]], SUPER[triangle, triangle]]");
    assert_eq!(grid.dimensions(), Dimensions { height: 2, width: 2 });
}

#[test]
fn test_juxtaposition_mismatch_is_diagnosed() {
    let err = evaluate("SUPER[carre, JUXT[triangle, SUPER[carre, carre]]]").unwrap_err();
    let message = err.to_string();
    match err {
        PatchworkError::DimensionMismatch {
            operation,
            path,
            expression,
            mismatch,
        } => {
            assert_eq!(operation.name(), "JUXT");
            assert_eq!(path.to_string(), "root.1");
            assert_eq!(expression, "JUXT[triangle, SUPER[carre, carre]]");
            assert_eq!(mismatch.left, Dimensions { height: 1, width: 1 });
            assert_eq!(mismatch.right, Dimensions { height: 2, width: 1 });
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(message.contains("JUXT"));
    assert!(message.contains("root.1"));
    assert!(message.contains("JUXT[triangle, SUPER[carre, carre]]"));
}

#[test]
fn test_superposition_mismatch_aborts_ancestors() {
    let result = evaluate("ROT[ROT[SUPER[carre, JUXT[carre, carre]]]]");
    assert!(matches!(
        result,
        Err(PatchworkError::DimensionMismatch { ref path, .. }) if path.segments() == [0, 0]
    ));
}

#[test]
fn test_construction_errors_surface_from_parse() {
    assert!(matches!(
        evaluate("JUXT[carre, losange]"),
        Err(PatchworkError::InvalidPrimitiveKind(_))
    ));
    assert!(matches!(
        evaluate("TWIST[carre]"),
        Err(PatchworkError::InvalidOperationKind { .. })
    ));
}

#[test]
fn test_tens_of_nested_levels() {
    let mut source = String::from("carre");
    for _ in 0..20 {
        source = format!("ROT[ROT[SUPER[{}, triangle]]]", source);
    }
    let ast = parse_expression(&source).unwrap();
    assert_eq!(ast.depth(), 61);

    let grid = Evaluator::new().evaluate(&ast).unwrap();
    assert_eq!(grid.dimensions(), Dimensions { height: 21, width: 1 });
}

#[test]
fn test_rotation_order_four_on_evaluated_grid() {
    let grid = evaluate("SUPER[JUXT[carre, ROT[triangle]], JUXT[triangle, carre]]").unwrap();
    assert_eq!(rotate(&rotate(&rotate(&rotate(&grid)))), grid);
}

#[test]
fn test_merge_properties_on_evaluated_grids() {
    let a = evaluate("JUXT[ROT[carre], triangle]").unwrap();
    let b = evaluate("JUXT[triangle, JUXT[carre, ROT[ROT[triangle]]]]").unwrap();

    let side = juxtapose(&a, &b).unwrap();
    assert_eq!(side.width(), a.width() + b.width());
    for i in 0..side.height() {
        for j in 0..side.width() {
            let expected = if j < a.width() {
                a.get(i, j)
            } else {
                b.get(i, j - a.width())
            };
            assert_eq!(side.get(i, j), expected);
        }
    }

    // widths 2 and 3 cannot be stacked
    assert!(superpose(&a, &b).is_err());
    let stacked = superpose(&a, &a).unwrap();
    assert_eq!(stacked.height(), 2 * a.height());
}
