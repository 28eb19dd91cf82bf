//! Builder patterns for object construction.
//!
//! Builders consume themselves on `build()` and validate the assembled
//! configuration before handing out the finished object.

pub mod router;

// Re-export builders for convenience
pub use router::RouterBuilder;
