use crate::error::{AppError, AppResult};
use crate::theme::tokens::{StyleKey, StyleTokenSet, fallback};
use crate::theme::types::{PaletteFile, ThemeConfig, ThemeMode, parse_color};
use crate::theme::validation::{
    PaletteDirValidator, PaletteNameValidator, PaletteValidator, ThemeValidationError,
};
use crate::validation::Validator;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const EMBEDDED_DARK: &str = include_str!("../../themes/dark.toml");
const EMBEDDED_LIGHT: &str = include_str!("../../themes/light.toml");

/// A palette resolved into tokens, plus the keys that had to use the
/// built-in fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPalette {
    pub tokens: StyleTokenSet,
    pub fallbacks: Vec<StyleKey>,
}

/// Palette loader responsible for reading palette files and turning them into
/// style tokens.
///
/// Palettes are embedded in the binary. A configured directory may override
/// either mode with a `dark.toml` / `light.toml` of its own.
pub struct PaletteLoader {
    palette_dir: Option<PathBuf>,
    name_validator: PaletteNameValidator,
    dir_validator: PaletteDirValidator,
    palette_validator: PaletteValidator,
}

impl PaletteLoader {
    pub fn new(palette_dir: Option<PathBuf>) -> Self {
        Self {
            palette_dir,
            name_validator: PaletteNameValidator,
            dir_validator: PaletteDirValidator,
            palette_validator: PaletteValidator,
        }
    }

    pub fn from_config(config: &ThemeConfig) -> Self {
        Self::new(config.palette_dir.as_deref().map(expand_home))
    }

    pub fn palette_dir(&self) -> Option<&Path> {
        self.palette_dir.as_deref()
    }

    /// Source text of the palette shipped with the binary.
    pub fn embedded_source(mode: ThemeMode) -> &'static str {
        match mode {
            ThemeMode::Dark => EMBEDDED_DARK,
            ThemeMode::Light => EMBEDDED_LIGHT,
        }
    }

    pub fn parse(content: &str, source: &str) -> AppResult<PaletteFile> {
        toml::from_str(content).map_err(|e| {
            AppError::Theme(format!("Failed to parse palette '{source}': {e}"))
        })
    }

    /// Read, parse and validate one palette file.
    ///
    /// Recoverable problems (bad colors, unknown keys) are logged and the
    /// palette is returned. Anything else is an error.
    pub fn load_file(&self, path: &Path, mode: ThemeMode) -> AppResult<PaletteFile> {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default();
        self.name_validator.validate(stem)?;

        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Theme(format!(
                "Failed to read palette file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let palette = Self::parse(&content, &path.display().to_string())?;

        if palette.metadata.mode != mode {
            return Err(AppError::Theme(format!(
                "Palette '{}' declares mode '{}' but was loaded as '{}'",
                path.display(),
                palette.metadata.mode,
                mode
            )));
        }

        if let Err(errors) = self.palette_validator.validate(&palette) {
            if !PaletteValidator::is_recoverable(&errors) {
                let first = errors
                    .into_iter()
                    .find(|e| matches!(e, ThemeValidationError::MissingMetadata { .. }));
                return Err(first.map(AppError::from).unwrap_or_else(|| {
                    AppError::Theme(format!("Invalid palette '{}'", path.display()))
                }));
            }

            for error in &errors {
                log::warn!("Palette '{}': {}", path.display(), error.user_message());
            }
        }

        Ok(palette)
    }

    /// Palette for a mode: the override file when one is configured and
    /// usable, the embedded palette otherwise.
    pub fn load(&self, mode: ThemeMode) -> AppResult<PaletteFile> {
        if let Some(dir) = &self.palette_dir {
            match self.dir_validator.validate(dir) {
                Ok(()) => {
                    let path = dir.join(format!("{}.toml", mode.name()));
                    if path.is_file() {
                        match self.load_file(&path, mode) {
                            Ok(palette) => {
                                log::info!("Loaded {} palette from {}", mode, path.display());
                                return Ok(palette);
                            }
                            Err(e) => {
                                log::warn!(
                                    "Falling back to built-in {mode} palette: {e}"
                                );
                            }
                        }
                    } else {
                        log::debug!("No {} override in {}", mode, dir.display());
                    }
                }
                Err(e) => log::warn!("{}", e.user_message()),
            }
        }

        Self::parse(
            Self::embedded_source(mode),
            &format!("built-in {mode} palette"),
        )
    }

    /// Resolve every style key of a palette, falling back per key.
    pub fn resolve(palette: &PaletteFile, mode: ThemeMode) -> ResolvedPalette {
        let mut colors = BTreeMap::new();
        let mut fallbacks = Vec::new();

        for key in StyleKey::ALL {
            let color = match palette.colors.get(key.name()) {
                Some(raw) => match parse_color(raw) {
                    Some(color) => color,
                    None => {
                        log::warn!(
                            "Palette '{}': invalid color '{}' for '{}', using default",
                            palette.metadata.name,
                            raw,
                            key.name()
                        );
                        fallbacks.push(key);
                        fallback::color(mode, key)
                    }
                },
                None => {
                    log::warn!(
                        "Palette '{}': missing '{}', using default",
                        palette.metadata.name,
                        key.name()
                    );
                    fallbacks.push(key);
                    fallback::color(mode, key)
                }
            };
            colors.insert(key, color);
        }

        ResolvedPalette {
            tokens: StyleTokenSet::new(mode, palette.metadata.border.border_type(), colors),
            fallbacks,
        }
    }

    /// Problems with the override palettes, one line each, for showing to
    /// the user at startup. Empty when no directory is configured or every
    /// override file loaded cleanly.
    pub fn override_warnings(&self) -> Vec<String> {
        let Some(dir) = &self.palette_dir else {
            return Vec::new();
        };
        if let Err(e) = self.dir_validator.validate(dir) {
            return vec![e.user_message()];
        }

        let mut warnings = Vec::new();
        for mode in ThemeMode::ALL {
            let path = dir.join(format!("{}.toml", mode.name()));
            if !path.is_file() {
                continue;
            }
            match self.load_file(&path, mode) {
                Ok(palette) => {
                    let fallbacks = Self::resolve(&palette, mode).fallbacks;
                    if !fallbacks.is_empty() {
                        warnings.push(format!(
                            "{}: {} color(s) missing or invalid, using defaults",
                            path.display(),
                            fallbacks.len()
                        ));
                    }
                }
                Err(e) => warnings.push(format!(
                    "{}: {e}. Using the built-in {mode} palette",
                    path.display()
                )),
            }
        }
        warnings
    }

    /// Token set for a mode. Never fails: the last resort is the fallback set.
    pub fn load_tokens(&self, mode: ThemeMode) -> StyleTokenSet {
        match self.load(mode) {
            Ok(palette) => Self::resolve(&palette, mode).tokens,
            Err(e) => {
                log::error!("Using fallback colors for {mode} mode: {e}");
                StyleTokenSet::fallback(mode)
            }
        }
    }
}

impl Default for PaletteLoader {
    fn default() -> Self {
        Self::new(None)
    }
}

fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(path)),
        None => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_matches, assert_ok};
    use tuirealm::props::Color;

    #[test]
    fn test_embedded_palettes_resolve_without_fallbacks() {
        for mode in ThemeMode::ALL {
            let palette = assert_ok!(PaletteLoader::default().load(mode));
            assert_eq!(palette.metadata.mode, mode);
            assert_ok!(PaletteValidator.validate(&palette));

            let resolved = PaletteLoader::resolve(&palette, mode);
            assert!(resolved.fallbacks.is_empty(), "{mode}: {:?}", resolved.fallbacks);
            assert!(resolved.tokens.is_complete());
        }
    }

    #[test]
    fn test_missing_and_invalid_keys_fall_back() {
        let palette = assert_ok!(PaletteLoader::parse(
            r##"
            [metadata]
            name = "Partial"
            mode = "dark"

            [colors]
            background = "#101010"
            text_primary = "#zzzzzz"
            "##,
            "test"
        ));

        let resolved = PaletteLoader::resolve(&palette, ThemeMode::Dark);
        assert!(resolved.tokens.is_complete());
        assert_eq!(resolved.tokens.background(), Color::Rgb(16, 16, 16));
        assert_eq!(
            resolved.tokens.text_primary(),
            fallback::color(ThemeMode::Dark, StyleKey::TextPrimary)
        );
        assert!(resolved.fallbacks.contains(&StyleKey::TextPrimary));
        assert_eq!(resolved.fallbacks.len(), StyleKey::ALL.len() - 1);
    }

    #[test]
    fn test_parse_error_is_theme_error() {
        let result = PaletteLoader::parse("[metadata", "broken");
        assert_matches!(result, Err(AppError::Theme(_)));
    }

    #[test]
    fn test_override_directory_wins() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("light.toml"),
            r##"
            [metadata]
            name = "Paper"
            mode = "light"
            border = "double"

            [colors]
            background = "white"
            "##,
        )
        .unwrap();

        let loader = PaletteLoader::new(Some(dir.path().to_path_buf()));
        let light = assert_ok!(loader.load(ThemeMode::Light));
        assert_eq!(light.metadata.name, "Paper");

        // No dark.toml in the directory: embedded palette is used.
        let dark = assert_ok!(loader.load(ThemeMode::Dark));
        assert_eq!(dark.metadata.name, "Coinfolio Dark");
    }

    #[test]
    fn test_mode_mismatch_falls_back_to_embedded() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("dark.toml"),
            "[metadata]\nname = \"Wrong\"\nmode = \"light\"\n",
        )
        .unwrap();

        let loader = PaletteLoader::new(Some(dir.path().to_path_buf()));
        assert_err!(loader.load_file(&dir.path().join("dark.toml"), ThemeMode::Dark));

        let palette = assert_ok!(loader.load(ThemeMode::Dark));
        assert_eq!(palette.metadata.name, "Coinfolio Dark");
    }

    #[test]
    fn test_override_warnings() {
        let dir = tempfile::tempdir().unwrap();
        let loader = PaletteLoader::new(Some(dir.path().to_path_buf()));
        assert!(loader.override_warnings().is_empty());

        fs::write(
            dir.path().join("dark.toml"),
            "[metadata]\nname = \"Wrong\"\nmode = \"light\"\n",
        )
        .unwrap();
        let warnings = loader.override_warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("built-in dark palette"));

        assert!(PaletteLoader::default().override_warnings().is_empty());
    }

    #[test]
    fn test_missing_directory_still_loads_tokens() {
        let loader = PaletteLoader::new(Some(PathBuf::from("/nonexistent/coinfolio/themes")));
        assert!(loader.load_tokens(ThemeMode::Light).is_complete());
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("/tmp/themes"), PathBuf::from("/tmp/themes"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/themes"), home.join("themes"));
        }
    }
}
