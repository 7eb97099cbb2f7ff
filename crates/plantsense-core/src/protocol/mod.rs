//! Wire-level submission contract.
//!
//! Re-exports the decoder so downstream consumers can depend on this module
//! directly.

pub mod submit;

pub use submit::decode_submission;
