//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::ClassifyUseCase;
use crate::config::ValidatorConfig;
use crate::domain::policies::{
    AnyDirectoryValidator, BackendMarkerValidator, ConfigFileFilter, ConfigPresenceValidator,
    ValidatorMode,
};
use crate::domain::ports::{FileSystem, StackValidator};
use crate::infrastructure::LocalFs;

/// Type alias for the concrete ClassifyUseCase used by the binary
pub type ConcreteClassifyUseCase = ClassifyUseCase<LocalFs, Box<dyn StackValidator>>;

/// Build the stack validator selected by configuration
pub fn create_validator<FS>(fs: FS, config: &ValidatorConfig) -> Box<dyn StackValidator>
where
    FS: FileSystem + 'static,
{
    let filter = ConfigFileFilter::new(&config.extensions);
    match config.mode {
        ValidatorMode::Backend => Box::new(BackendMarkerValidator::new(
            fs,
            filter,
            config.marker.clone(),
        )),
        ValidatorMode::HasConfig => Box::new(ConfigPresenceValidator::new(fs, filter)),
        ValidatorMode::None => Box::new(AnyDirectoryValidator::new(fs)),
    }
}

/// Create a classify use case on the local file system
pub fn create_classify_use_case(config: &ValidatorConfig) -> ConcreteClassifyUseCase {
    let validator = create_validator(LocalFs::new(), config);
    ClassifyUseCase::new(LocalFs::new(), validator)
}
