//! Fault facade crate.
//!
//! This crate re-exports `fault-core` and, with the `std` feature, the
//! standard producers from `fault-std` with a single entry point.

pub use fault_core as core;
#[cfg(feature = "std")]
pub use fault_std as std;

pub use fault_core::{Failure, Fallible, Record, Recognize, Value, fail, fail_with, is_failure};

pub mod prelude {
    pub use fault_core::prelude::*;
    #[cfg(feature = "std")]
    pub use fault_std::prelude::*;
}
