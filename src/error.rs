//! Error types shared by the converter, the options layer and the picker.

use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, KolorError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum KolorError {
    /// A numeric helper received a value it cannot work with.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

/// Rejected construction options. Raised once, at build time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("picker type is required")]
    MissingKind,
    #[error("unknown picker type `{0}`, expected `linear` or `radial`")]
    UnknownKind(String),
    #[error("a render target is required")]
    MissingRenderTarget,
    #[error("an on_color_change callback is required")]
    MissingCallback,
    #[error("render target {width}x{height} leaves no room for the {surface} surface")]
    TargetTooSmall {
        width: u32,
        height: u32,
        surface: &'static str,
    },
    #[error("invalid {field} color `{value}`")]
    InvalidColor { field: &'static str, value: String },
    #[error("padding must be a finite, non-negative number (got {0})")]
    InvalidPadding(f64),
}
