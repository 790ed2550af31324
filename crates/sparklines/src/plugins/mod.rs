//! Chart layouts and the element orchestrator
//!
//! One layout per chart type, each implementing
//! [`ChartLayout`](crate::core::ChartLayout), plus the orchestrator that
//! discovers chart elements and re-renders them on `update`.

pub mod bar;
pub mod line;
pub mod orchestrator;
pub mod pie;
pub mod stacked;

pub use bar::BarLayout;
pub use line::LineLayout;
pub use orchestrator::*;
pub use pie::PieLayout;
pub use stacked::StackedLayout;
