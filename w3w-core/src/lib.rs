//! Offline building blocks for three-word address clients
//!
//! This crate holds everything that does not need the network:
//! - [`matcher`]: recognise strings shaped like three-word addresses
//! - [`charset`]: the character classes the recognition rules are built from
//! - [`geo`]: coordinate, bounding box, circle and polygon values
//!
//! # Example
//!
//! ```rust
//! use w3w_core::{find_candidates, is_full_match, is_likely_typo};
//!
//! let text = "Meet me at ///filled.count.soap tomorrow";
//! assert_eq!(find_candidates(text), vec!["filled.count.soap"]);
//!
//! assert!(is_full_match("///filled.count.soap"));
//! assert!(!is_full_match("filled-count-soap"));
//! assert!(is_likely_typo("filled-count-soap"));
//! ```

#![warn(missing_docs)]

pub mod charset;
pub mod error;
pub mod geo;
pub mod matcher;

pub use error::{CoreError, Result};
pub use geo::{BoundingBox, Circle, Coordinates, Polygon, Square};
pub use matcher::{
    candidate_spans, find_candidates, is_full_match, is_likely_typo, AddressMatcher, Candidate,
};
