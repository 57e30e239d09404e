//! Standard producers built on `fault-core`.

pub mod nodes;
pub mod prelude;

pub use nodes::Node;
pub use nodes::math::divide;
pub use nodes::parse::{parse_int, parse_list};
