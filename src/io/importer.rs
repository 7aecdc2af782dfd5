// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Expression importer for files and interactive streams

use crate::ast::Node;
use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Read an expression file and parse it into a tree
pub fn import_expression_file(path: impl AsRef<Path>) -> Result<Node> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read expression file: {}", path.display()))?;

    super::parse_expression(&source)
        .with_context(|| format!("Failed to parse expression file: {}", path.display()))
}

/// Read everything from `reader` until end-of-input and parse it
pub fn read_expression(mut reader: impl Read) -> Result<Node> {
    let mut source = String::new();
    reader
        .read_to_string(&mut source)
        .context("Failed to read expression from input")?;

    super::parse_expression(&source).context("Failed to parse expression from input")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_import_expression_file() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "JUXT[carre, triangle]")?;

        let node = import_expression_file(file.path())?;
        assert_eq!(node.to_string(), "JUXT[carre, triangle]");

        Ok(())
    }

    #[test]
    fn test_import_missing_file() {
        let err = import_expression_file("does/not/exist.pw").unwrap_err();
        assert!(err.to_string().contains("Failed to read expression file"));
    }

    #[test]
    fn test_read_expression_from_stream() -> Result<()> {
        let input = b"ROT[\n  triangle\n]\n";
        let node = read_expression(&input[..])?;
        assert_eq!(node.to_string(), "ROT[triangle]");
        Ok(())
    }
}
