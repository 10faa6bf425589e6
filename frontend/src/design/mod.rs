//! Design tokens and colour themes.
//!
//! [`TokenStore`] maps each [`SettingKey`] to a named catalog value and
//! writes the resolved payload into the page as CSS custom properties.
//! [`ThemeSwitch`] owns the active [`ThemeId`] and notifies subscribers when
//! it changes. Both persist through a [`PreferenceStorage`] and render
//! through a [`StyleEnvironment`], so they run the same against the browser
//! and against the in-memory stand-ins used in tests.

mod catalog;
mod error;
mod storage;
mod style;
mod system;
mod theme;
mod tokens;

pub use catalog::{Payload, Setting, SettingKey};
pub use error::{DesignError, StorageError, StyleError};
pub use storage::{BrowserStorage, MemoryStorage, PreferenceStorage, Preferences, StorageResult};
pub use style::{DocumentStyle, MemoryStyle, StyleEnvironment, StyleResult, THEME_ATTRIBUTE};
pub use system::DesignSystem;
pub use theme::{ThemeChange, ThemeId, ThemeListener, ThemeSwitch, UnknownTheme};
pub use tokens::TokenStore;
