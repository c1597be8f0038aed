use crate::theme::loader::PaletteLoader;
use crate::theme::tokens::StyleTokenSet;
use crate::theme::types::ThemeMode;
use std::sync::Arc;

/// Pure mapping from theme mode to resolved style tokens.
///
/// Both token sets are resolved once when the resolver is built; `resolve`
/// only hands out the precomputed set, so the same mode always yields equal
/// tokens regardless of what happened before.
#[derive(Debug, Clone)]
pub struct StyleResolver {
    dark: Arc<StyleTokenSet>,
    light: Arc<StyleTokenSet>,
}

impl StyleResolver {
    pub fn new(dark: StyleTokenSet, light: StyleTokenSet) -> Self {
        Self {
            dark: Arc::new(dark),
            light: Arc::new(light),
        }
    }

    pub fn from_loader(loader: &PaletteLoader) -> Self {
        Self::new(
            loader.load_tokens(ThemeMode::Dark),
            loader.load_tokens(ThemeMode::Light),
        )
    }

    /// Resolver over the palettes shipped with the binary.
    pub fn embedded() -> Self {
        Self::from_loader(&PaletteLoader::default())
    }

    pub fn resolve(&self, mode: ThemeMode) -> Arc<StyleTokenSet> {
        match mode {
            ThemeMode::Dark => Arc::clone(&self.dark),
            ThemeMode::Light => Arc::clone(&self.light),
        }
    }
}

impl Default for StyleResolver {
    fn default() -> Self {
        Self::embedded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tuirealm::props::Color;

    #[test]
    fn test_resolve_is_complete_for_both_modes() {
        let resolver = StyleResolver::embedded();
        for mode in ThemeMode::ALL {
            let tokens = resolver.resolve(mode);
            assert!(tokens.is_complete());
            assert_eq!(tokens.mode(), mode);
        }
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let resolver = StyleResolver::embedded();
        let first = resolver.resolve(ThemeMode::Light);
        let _ = resolver.resolve(ThemeMode::Dark);
        let second = resolver.resolve(ThemeMode::Light);
        assert_eq!(*first, *second);

        let other = StyleResolver::embedded();
        assert_eq!(*other.resolve(ThemeMode::Light), *first);
    }

    #[test]
    fn test_modes_differ() {
        let resolver = StyleResolver::embedded();
        let dark = resolver.resolve(ThemeMode::Dark);
        let light = resolver.resolve(ThemeMode::Light);

        assert_ne!(dark.background(), light.background());
        assert_ne!(dark.border_type(), light.border_type());
        assert_ne!(dark.text_primary(), Color::Reset);
    }
}
