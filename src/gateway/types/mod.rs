//! Gateway types module
//!
//! - [`response`]: error body and the boundary error type
//! - [`extract`]: `Json`/`Path` wrappers that reject with that error body

pub mod extract;
pub mod response;

pub use extract::{JsonBody, PathParam};
pub use response::{ApiError, AtPath, ErrorDetails};
