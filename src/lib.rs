//! Field of view on an unbounded tile grid by recursive symmetric shadowcasting.
//!
//! The caller owns the grid. A cast asks the caller's opacity function about
//! each cell it reaches and hands every visible cell to a visit callback.

pub mod beam;
pub mod cast;
pub mod circle;
pub mod config;
pub mod octant;
pub mod opacity;
pub mod point;
pub mod shadowcast;
pub mod slope;

pub use beam::{compute_beam, Direction};
pub use cast::{Cast, Shape};
pub use circle::compute_circle;
pub use config::{Config, ConfigError};
pub use opacity::Opacity;
pub use point::Point;
