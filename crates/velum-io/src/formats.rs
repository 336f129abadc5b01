//! TetGen-style text format parsers.
//!
//! All three formats share the same shape: a header line whose first
//! token is the record count, followed by one record per line beginning
//! with a 1-based record index. Node indices inside `.ele`/`.face`
//! records are 1-based and shifted to 0-based here.

use velum_math::Vec3;
use velum_types::{VelumError, VelumResult};

/// Parses a `.node` file into vertex positions.
///
/// Header: `<count> [dim] [attrs] [boundary]`. Each record:
/// `<index> <x> <y> <z>`.
pub fn parse_node(text: &str) -> VelumResult<Vec<Vec3>> {
    let mut records = Records::new(text);
    let count = records.header_count()?;
    let mut positions = Vec::with_capacity(count);

    for _ in 0..count {
        let (line_no, tokens) = records.next_record()?;
        if tokens.len() < 4 {
            return Err(VelumError::Parse {
                line: line_no,
                message: format!("expected index + 3 coordinates, found {} tokens", tokens.len()),
            });
        }
        let x = parse_float(tokens[1], line_no)?;
        let y = parse_float(tokens[2], line_no)?;
        let z = parse_float(tokens[3], line_no)?;
        positions.push(Vec3::new(x, y, z));
    }

    Ok(positions)
}

/// Parses an `.ele` file into a flat tetrahedron index buffer
/// (4 entries per cell, 0-based).
///
/// Header: `<count> [nodes_per_cell] [attrs]`. Each record:
/// `<index> <a> <b> <c> <d>` with 1-based node indices.
pub fn parse_ele(text: &str, node_count: usize) -> VelumResult<Vec<u32>> {
    parse_index_records(text, 4, node_count)
}

/// Parses a `.face` file into a flat triangle index buffer
/// (3 entries per face, 0-based).
///
/// Header: `<count> [boundary]`. Each record: `<index> <a> <b> <c>`
/// with 1-based node indices.
pub fn parse_face(text: &str, node_count: usize) -> VelumResult<Vec<u32>> {
    parse_index_records(text, 3, node_count)
}

fn parse_index_records(text: &str, arity: usize, node_count: usize) -> VelumResult<Vec<u32>> {
    let mut records = Records::new(text);
    let count = records.header_count()?;
    let mut indices = Vec::with_capacity(count * arity);

    for _ in 0..count {
        let (line_no, tokens) = records.next_record()?;
        if tokens.len() < arity + 1 {
            return Err(VelumError::Parse {
                line: line_no,
                message: format!(
                    "expected index + {} node references, found {} tokens",
                    arity,
                    tokens.len()
                ),
            });
        }
        for token in &tokens[1..=arity] {
            let raw: usize = token.parse().map_err(|_| VelumError::Parse {
                line: line_no,
                message: format!("invalid node index '{token}'"),
            })?;
            if raw == 0 {
                return Err(VelumError::Parse {
                    line: line_no,
                    message: "node indices are 1-based; found 0".into(),
                });
            }
            let shifted = raw - 1;
            if shifted >= node_count {
                return Err(VelumError::Parse {
                    line: line_no,
                    message: format!(
                        "node index {raw} out of range (node count: {node_count})"
                    ),
                });
            }
            indices.push(shifted as u32);
        }
    }

    Ok(indices)
}

fn parse_float(token: &str, line_no: usize) -> VelumResult<f32> {
    token.parse().map_err(|_| VelumError::Parse {
        line: line_no,
        message: format!("invalid number '{token}'"),
    })
}

/// Line-oriented token reader. Skips blank lines and `#` comments while
/// tracking 1-based line numbers for diagnostics.
struct Records<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
}

impl<'a> Records<'a> {
    fn new(text: &'a str) -> Self {
        Self { lines: text.lines().enumerate() }
    }

    fn next_record(&mut self) -> VelumResult<(usize, Vec<&'a str>)> {
        for (i, line) in self.lines.by_ref() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            return Ok((i + 1, trimmed.split_whitespace().collect()));
        }
        Err(VelumError::Parse {
            line: 0,
            message: "unexpected end of file".into(),
        })
    }

    fn header_count(&mut self) -> VelumResult<usize> {
        let (line_no, tokens) = self.next_record()?;
        tokens[0].parse().map_err(|_| VelumError::Parse {
            line: line_no,
            message: format!("invalid record count '{}'", tokens[0]),
        })
    }
}
