//! # Pictogen core pipeline
//!
//! - MD5 digest extraction
//! - Color selection
//! - Symmetric occupancy grid
//! - Pixel mapping and PNG rendering

pub mod color;
pub mod errors;
pub mod grid;
pub mod hashes;
pub mod identicons;
pub mod pixels;
pub mod render;
