use crate::error::AppError;
use crate::theme::tokens::StyleKey;
use crate::theme::types::{PaletteFile, ThemeMode, parse_color};
use crate::validation::Validator;
use std::path::Path;

/// Validation errors specific to palette files and directories
#[derive(Debug, Clone, PartialEq)]
pub enum ThemeValidationError {
    InvalidPaletteName { name: String, reason: String },
    InvalidPaletteDir { path: String, reason: String },
    MissingMetadata { field: String },
    InvalidColor { key: String, value: String },
    UnknownKey { key: String },
}

impl ThemeValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ThemeValidationError::InvalidPaletteName { name, reason } => {
                format!(
                    "Invalid palette name: '{name}'\n\n\
                    Reason: {reason}\n\n\
                    Palette files must be named after a theme mode: dark.toml or light.toml."
                )
            }
            ThemeValidationError::InvalidPaletteDir { path, reason } => {
                format!(
                    "Invalid palette directory: '{path}'\n\n\
                    Reason: {reason}\n\n\
                    Please ensure the path exists and is a readable directory."
                )
            }
            ThemeValidationError::MissingMetadata { field } => {
                format!(
                    "Missing palette metadata: '{field}'\n\n\
                    Please ensure the [metadata] table names the palette."
                )
            }
            ThemeValidationError::InvalidColor { key, value } => {
                format!(
                    "Invalid color for '{key}': '{value}'\n\n\
                    Use #rrggbb or one of the 16 named terminal colors. \
                    The built-in default is used instead."
                )
            }
            ThemeValidationError::UnknownKey { key } => {
                format!(
                    "Unknown palette key: '{key}'\n\n\
                    The key is ignored. Check for typos in the [colors] table."
                )
            }
        }
    }
}

impl From<ThemeValidationError> for AppError {
    fn from(error: ThemeValidationError) -> Self {
        AppError::Theme(error.user_message())
    }
}

/// Validator for palette file stems
pub struct PaletteNameValidator;

impl Validator<str> for PaletteNameValidator {
    type Error = ThemeValidationError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        if input.is_empty() {
            return Err(ThemeValidationError::InvalidPaletteName {
                name: input.to_string(),
                reason: "Name cannot be empty".to_string(),
            });
        }

        if input.len() > 30 {
            return Err(ThemeValidationError::InvalidPaletteName {
                name: input.to_string(),
                reason: "Name too long (max 30 characters)".to_string(),
            });
        }

        if !input
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ThemeValidationError::InvalidPaletteName {
                name: input.to_string(),
                reason: "Name contains invalid characters".to_string(),
            });
        }

        if input.parse::<ThemeMode>().is_err() {
            return Err(ThemeValidationError::InvalidPaletteName {
                name: input.to_string(),
                reason: "Name does not match a theme mode".to_string(),
            });
        }

        Ok(())
    }
}

/// Validator for the configured palette directory
pub struct PaletteDirValidator;

impl Validator<Path> for PaletteDirValidator {
    type Error = ThemeValidationError;

    fn validate(&self, input: &Path) -> Result<(), Self::Error> {
        if !input.exists() {
            return Err(ThemeValidationError::InvalidPaletteDir {
                path: input.display().to_string(),
                reason: "Directory does not exist".to_string(),
            });
        }

        if !input.is_dir() {
            return Err(ThemeValidationError::InvalidPaletteDir {
                path: input.display().to_string(),
                reason: "Path is not a directory".to_string(),
            });
        }

        Ok(())
    }
}

/// Validator for a parsed palette document.
///
/// Reports every problem at once. Missing metadata makes the palette
/// unusable; bad colors and unknown keys are recoverable.
pub struct PaletteValidator;

impl PaletteValidator {
    /// True when the errors allow the palette to be used with fallbacks.
    pub fn is_recoverable(errors: &[ThemeValidationError]) -> bool {
        !errors
            .iter()
            .any(|e| matches!(e, ThemeValidationError::MissingMetadata { .. }))
    }
}

impl Validator<PaletteFile> for PaletteValidator {
    type Error = Vec<ThemeValidationError>;

    fn validate(&self, input: &PaletteFile) -> Result<(), Self::Error> {
        let mut errors = Vec::new();

        if input.metadata.name.trim().is_empty() {
            errors.push(ThemeValidationError::MissingMetadata {
                field: "name".to_string(),
            });
        }

        for (key, value) in &input.colors {
            if StyleKey::from_name(key).is_none() {
                errors.push(ThemeValidationError::UnknownKey { key: key.clone() });
            } else if parse_color(value).is_none() {
                errors.push(ThemeValidationError::InvalidColor {
                    key: key.clone(),
                    value: value.clone(),
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
