//! Domain types for workplan
//!
//! Closed enumerations used as lookup keys and data-model constraints:
//! Weekday, Intensity, Location.

mod intensity;
mod location;
mod weekday;

pub use intensity::Intensity;
pub use location::Location;
pub use weekday::Weekday;
