// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Patchwork expression parser using pest

use crate::ast::{Node, OperationKind};
use crate::error::{PatchworkError, Result};
use pest::error::LineColLocation;
use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "io/patchwork.pest"]
struct PatchworkParser;

/// Parse an expression such as `JUXT[ROT[carre], triangle]` into a tree
pub fn parse_expression(source: &str) -> Result<Node> {
    let mut pairs = PatchworkParser::parse(Rule::program, source).map_err(syntax_error)?;

    let expr = pairs
        .next()
        .and_then(|program| program.into_inner().find(|pair| pair.as_rule() == Rule::expr))
        .ok_or_else(|| PatchworkError::Parse {
            line: 1,
            column: 1,
            message: "expected an expression".to_string(),
        })?;

    build_expr(expr)
}

fn build_expr(pair: Pair<Rule>) -> Result<Node> {
    let (line, column) = pair.line_col();
    let inner = pair
        .into_inner()
        .next()
        .ok_or_else(|| malformed(line, column, "empty expression"))?;

    match inner.as_rule() {
        Rule::primitive => Node::leaf_named(inner.as_str()),
        Rule::application => build_application(inner),
        rule => Err(malformed(line, column, &format!("unexpected {:?}", rule))),
    }
}

fn build_application(pair: Pair<Rule>) -> Result<Node> {
    let (line, column) = pair.line_col();
    let mut inner = pair.into_inner();

    let op: OperationKind = inner
        .next()
        .ok_or_else(|| malformed(line, column, "missing operator"))?
        .as_str()
        .parse()?;

    let operands = inner
        .next()
        .ok_or_else(|| malformed(line, column, "missing operands"))?
        .into_inner()
        .map(build_expr)
        .collect::<Result<Vec<_>>>()?;

    let count = operands.len();
    let mut operands = operands.into_iter();
    match (count, operands.next(), operands.next()) {
        (1, Some(operand), _) => Node::unary(op, operand),
        (2, Some(left), Some(right)) => Node::binary(op, left, right),
        _ => Err(PatchworkError::Parse {
            line,
            column,
            message: format!("{} applied to {} operands, at most two are allowed", op, count),
        }),
    }
}

fn malformed(line: usize, column: usize, message: &str) -> PatchworkError {
    PatchworkError::Parse {
        line,
        column,
        message: message.to_string(),
    }
}

fn syntax_error(err: pest::error::Error<Rule>) -> PatchworkError {
    let (line, column) = match err.line_col {
        LineColLocation::Pos(pos) => pos,
        LineColLocation::Span(start, _) => start,
    };

    PatchworkError::Parse {
        line,
        column,
        message: err.variant.message().into_owned(),
    }
}
