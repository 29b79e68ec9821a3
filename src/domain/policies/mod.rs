//! Domain Policies
//!
//! Business rules that can be swapped without touching callers.

pub mod stack_detection;

pub use stack_detection::{
    AnyDirectoryValidator, BackendMarkerValidator, ConfigFileFilter, ConfigPresenceValidator,
    ValidatorMode, DEFAULT_BACKEND_MARKER, DEFAULT_CONFIG_EXTENSIONS,
};
