//! Domain Layer
//!
//! This is the core of stacksort - classification rules without direct I/O.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (StackPath, GlobPattern, Environment)
//! - `services/` - Pure services (brace expansion, list parsing, environment
//!   classification, core/app partitioning)
//! - `policies/` - Swappable rules (stack detection heuristics)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No direct I/O** - file access always goes through the `FileSystem` port
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - Heuristics sit behind trait-defined ports

pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
