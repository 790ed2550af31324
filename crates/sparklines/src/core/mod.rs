//! Core abstractions for sparkline rendering
//!
//! Attribute resolution, the host capability trait, shape geometry types, and
//! the renderer that puts them together. Chart-specific layouts live in
//! [`crate::plugins`].

mod config;
mod document;
mod error;
mod host;
mod layout;
pub mod logging;
pub mod numeric;
mod renderer;
pub mod types;

pub use config::*;
pub use document::*;
pub use error::*;
pub use host::*;
pub use layout::*;
pub use logging::*;
pub use numeric::{format_number, parse_int_prefix, parse_int_with_default, parse_series};
pub use renderer::*;
pub use types::{ChartType, Point, PolylineShape, RectShape, Shape, ShapeKind, WedgeShape};
