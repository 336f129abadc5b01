//! # velum-io
//!
//! Text parsers for the TetGen-style `.node`, `.ele`, and `.face`
//! formats that feed the solid simulation path.
//!
//! These formats index nodes 1-based; the parsers shift to 0-based and
//! fail fast with a diagnostic naming the offending line, since a silent
//! partial load would produce a corrupt topology.

pub mod formats;

pub use formats::{parse_ele, parse_face, parse_node};
