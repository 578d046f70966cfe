//! Geometric transforms on pixel buffers.
//!
//! # Coordinate System
//!
//! - Coordinates are integer image pixels
//! - Origin is top-left corner
//! - Regions are half-open: the right and bottom edges are excluded

mod crop;

pub use crop::{apply_crop, CropRegion};
