//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local, in-memory)

pub mod fs;

// Re-export for convenience
pub use fs::{LocalFs, MemoryFs};
