//! # tnparse
//!
//! Metadata extraction for media release names. This crate re-exports
//! [`tnparse_core`]; see there for the catalog and pipeline details.
//!
//! ```rust
//! let result = tnparse::parse_default("Show.Name.S01E02.1080p.WEB-DL.DTS.5.1");
//!
//! assert_eq!(result.name, "Show Name");
//! assert_eq!(result.season, vec![1]);
//! assert_eq!(result.episode, vec![2]);
//! ```
pub use tnparse_core::*;
