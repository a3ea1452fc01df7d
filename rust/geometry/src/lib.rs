//! FloorGeo Geometry
//!
//! Turns the scene model's raw node geometry into output-space shapes:
//! ring tracing over unordered segment sets, ancestor-chain coordinate
//! resolution with the Y-axis flip, and per-node-kind geometry
//! derivation.

pub mod builder;
pub mod error;
pub mod resolve;
pub mod ring;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Vector2};

pub use builder::{Ring, ShapeGeometry, ShapeGeometryBuilder};
pub use error::{Error, Result};
pub use resolve::{flip_y, resolve_in_frame};
pub use ring::trace_ring;
