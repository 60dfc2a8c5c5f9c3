use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReportError>;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Capability not registered: {type_name}")]
    CapabilityNotRegistered { type_name: String },

    #[error("Failed to downcast type: {type_name}")]
    DowncastFailed { type_name: String },

    #[error("Circular dependency detected: {cycle}")]
    CircularDependency { cycle: String },

    #[error("Data access failed: {0}")]
    DataAccess(#[from] sea_orm::DbErr),

    #[error("Report delivery failed for {teachers} teacher(s)")]
    DeliveryFailed { teachers: usize },

    #[error("Invalid configuration for {key}: {message}")]
    Configuration { key: String, message: String },
}

impl ReportError {
    pub fn not_registered<T: ?Sized>() -> Self {
        Self::CapabilityNotRegistered {
            type_name: std::any::type_name::<T>().to_string(),
        }
    }

    pub fn config(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Configuration {
            key: key.into(),
            message: message.into(),
        }
    }
}
