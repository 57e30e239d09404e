pub use crate::nodes::Node;
pub use crate::nodes::debug::{FailNode, LogNode};
pub use crate::nodes::logic::{FilterNode, SwitchNode};
pub use crate::nodes::math::{Arithmetic, MathNode, MathOperation, divide};
pub use crate::nodes::parse::{parse_int, parse_list};
