use std::rc::Rc;

use super::storage::{BrowserStorage, MemoryStorage, PreferenceStorage, Preferences};
use super::style::{DocumentStyle, MemoryStyle, StyleEnvironment};
use super::theme::{ThemeId, ThemeSwitch};
use super::tokens::TokenStore;

/// Both design stores over one storage backend and one style environment.
///
/// Built by the application root and handed down through a context, so its
/// lifetime is the root component's.
#[derive(Clone, Debug, PartialEq)]
pub struct DesignSystem {
    pub tokens: TokenStore,
    pub themes: ThemeSwitch,
}

impl DesignSystem {
    pub fn new(storage: Rc<dyn PreferenceStorage>, style: Rc<dyn StyleEnvironment>) -> Self {
        Self {
            tokens: TokenStore::new(Preferences::new(storage.clone()), style.clone()),
            themes: ThemeSwitch::new(Preferences::new(storage), style),
        }
    }

    /// Local storage and the page's document root, degrading to in-memory
    /// stand-ins when either is missing.
    pub fn browser() -> Self {
        let storage: Rc<dyn PreferenceStorage> = match BrowserStorage::detect() {
            Some(storage) => Rc::new(storage),
            None => {
                tracing::warn!("local storage unavailable, preferences last for this session only");
                Rc::new(MemoryStorage::new())
            }
        };

        let style: Rc<dyn StyleEnvironment> = match DocumentStyle::detect() {
            Some(style) => Rc::new(style),
            None => {
                tracing::warn!("no document root, design changes won't render");
                Rc::new(MemoryStyle::new())
            }
        };

        Self::new(storage, style)
    }

    /// Materializes saved settings and the saved theme. Run once per session
    /// before anything reads theme state.
    pub fn start(&self) -> ThemeId {
        self.tokens.apply_all();
        let theme = self.themes.init();
        tracing::info!(%theme, "design system started");
        theme
    }
}
