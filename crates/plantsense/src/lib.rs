//! Top-level facade crate for plantsense.
//!
//! Re-exports core types and the server library so users can depend on a single crate.

pub mod core {
    pub use plantsense_core::*;
}

pub mod server {
    pub use plantsense_server::*;
}
