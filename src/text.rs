/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Plain-text matrix format and console table.
//!
//! # Input layout
//!
//! ```text
//! 4
//! 45 0 45 0
//! 0 80 5 75
//! 45 5 53 3
//! 0 75 3 78
//! ```
//!
//! First line: N. Next N non-blank lines: N whitespace-separated
//! non-negative integers each. Blank lines are ignored anywhere.
//!
//! # Table layout
//!
//! Header row, a separator of eight dashes per column, then the N data rows.
//! Every cell is followed by a tab.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::Write;

use crate::affinity::AffinityMatrix;
use crate::error::BeaError;
use crate::matrix::{Affinity, Matrix};

/// Parse the plain-text layout into a validated [`AffinityMatrix`].
pub fn parse_affinity(input: &str) -> Result<AffinityMatrix, BeaError> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l))
        .filter(|(_, l)| !l.trim().is_empty());

    let (size_line, header) = lines.next().ok_or(BeaError::MissingSize)?;
    let mut tokens = header.split_whitespace();
    let size_token = tokens.next().ok_or(BeaError::MissingSize)?;
    let n: usize = size_token.parse().map_err(|_| BeaError::InvalidToken {
        line: size_line,
        token: size_token.to_string(),
    })?;
    if let Some(extra) = tokens.next() {
        return Err(BeaError::InvalidToken {
            line: size_line,
            token: extra.to_string(),
        });
    }
    if n < 2 {
        return Err(BeaError::TooSmall { size: n });
    }

    // `n` is untrusted until the rows arrive
    let mut rows: Vec<Vec<Affinity>> = Vec::new();
    for (line, text) in lines.by_ref().take(n) {
        let row = text
            .split_whitespace()
            .map(|t| {
                t.parse::<Affinity>().map_err(|_| BeaError::InvalidToken {
                    line,
                    token: t.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        if row.len() != n {
            return Err(BeaError::NotSquare {
                row: rows.len() + 1,
                expected: n,
                found: row.len(),
            });
        }
        rows.push(row);
    }
    if rows.len() < n {
        return Err(BeaError::MissingRows {
            expected: n,
            found: rows.len(),
        });
    }
    if let Some((line, _)) = lines.next() {
        return Err(BeaError::TrailingData { line });
    }

    AffinityMatrix::from_rows(&rows)
}

/// Render `matrix` as the tab-separated console table.
pub fn render_table(matrix: &Matrix) -> String {
    let n = matrix.size();
    let mut out = String::new();
    for row in 0..=n {
        for &cell in matrix.row(row) {
            // Writing into a String cannot fail
            let _ = write!(out, "{cell}\t");
        }
        out.push('\n');
        if row == 0 {
            for _ in 0..n {
                out.push_str("--------");
            }
            out.push('\n');
        }
    }
    out
}

/// Render `affinity` back into the plain-text input layout.
pub fn write_affinity(affinity: &AffinityMatrix) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", affinity.size());
    for row in affinity.to_rows() {
        let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXTBOOK: &str = "4\n45 0 45 0\n0 80 5 75\n45 5 53 3\n0 75 3 78\n";

    #[test]
    fn parses_plain_text_layout() {
        let aa = parse_affinity(TEXTBOOK).unwrap();
        assert_eq!(aa.size(), 4);
        assert_eq!(aa.get(2, 4), 75);
        assert_eq!(aa.get(4, 4), 78);
    }

    #[test]
    fn blank_lines_and_extra_spaces_are_tolerated() {
        let aa = parse_affinity("\n2\n\n  1   2 \n3 4\n\n").unwrap();
        assert_eq!(aa.get(1, 2), 2);
        assert_eq!(aa.get(2, 1), 3);
    }

    #[test]
    fn empty_input_has_no_size() {
        assert_eq!(parse_affinity("  \n").unwrap_err(), BeaError::MissingSize);
    }

    #[test]
    fn negative_value_is_invalid() {
        let err = parse_affinity("2\n1 -2\n3 4\n").unwrap_err();
        assert_eq!(err, BeaError::InvalidToken { line: 2, token: "-2".to_string() });
    }

    #[test]
    fn short_row_is_not_square() {
        let err = parse_affinity("3\n1 2 3\n4 5\n6 7 8\n").unwrap_err();
        assert_eq!(err, BeaError::NotSquare { row: 2, expected: 3, found: 2 });
    }

    #[test]
    fn missing_row_is_reported() {
        let err = parse_affinity("3\n1 2 3\n4 5 6\n").unwrap_err();
        assert_eq!(err, BeaError::MissingRows { expected: 3, found: 2 });
    }

    #[test]
    fn oversized_declared_size_is_an_error() {
        let err = parse_affinity("18446744073709551615\n1 2\n3 4\n").unwrap_err();
        assert!(
            matches!(
                err,
                BeaError::NotSquare { row: 1, found: 2, .. } | BeaError::InvalidToken { line: 1, .. }
            ),
            "got {err:?}"
        );
    }

    #[test]
    fn large_size_without_rows_is_missing_rows() {
        let err = parse_affinity("4000000000\n").unwrap_err();
        assert!(
            matches!(
                err,
                BeaError::MissingRows { found: 0, .. } | BeaError::InvalidToken { line: 1, .. }
            ),
            "got {err:?}"
        );
    }

    #[test]
    fn trailing_row_is_reported() {
        let err = parse_affinity("2\n1 2\n3 4\n5 6\n").unwrap_err();
        assert_eq!(err, BeaError::TrailingData { line: 4 });
    }

    #[test]
    fn size_below_two_is_too_small() {
        assert_eq!(parse_affinity("1\n7\n").unwrap_err(), BeaError::TooSmall { size: 1 });
    }

    #[test]
    fn table_has_header_separator_and_tabs() {
        let aa = parse_affinity("2\n1 2\n3 4\n").unwrap();
        let table = render_table(aa.as_matrix());
        assert_eq!(table, "1\t2\t\n----------------\n1\t2\t\n3\t4\t\n");
    }

    #[test]
    fn written_layout_parses_back() {
        let aa = parse_affinity(TEXTBOOK).unwrap();
        assert_eq!(write_affinity(&aa), TEXTBOOK);
    }
}
