//! Common type definitions shared between crates

pub mod response;

pub use response::ErrorResponse;
