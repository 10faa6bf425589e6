use std::fmt;
use std::rc::Rc;

use super::catalog::{Payload, SettingKey};
use super::error::DesignError;
use super::storage::Preferences;
use super::style::StyleEnvironment;

/// Resolves, persists and applies the design settings.
///
/// Only value *names* are persisted; [`TokenStore::apply`] resolves them
/// through the catalog each time. A persisted name the catalog doesn't know
/// leaves its setting inert instead of writing garbage into the page.
#[derive(Clone)]
pub struct TokenStore {
    preferences: Preferences,
    style: Rc<dyn StyleEnvironment>,
}

impl TokenStore {
    pub fn new(preferences: Preferences, style: Rc<dyn StyleEnvironment>) -> Self {
        Self { preferences, style }
    }

    /// The persisted override, or the default.
    pub fn get(&self, key: SettingKey) -> String {
        self.preferences
            .get(&key.storage_key())
            .unwrap_or_else(|| key.default_value().to_owned())
    }

    pub fn is_valid(&self, key: SettingKey, value: &str) -> bool {
        key.setting().contains(value)
    }

    /// Persists `value` and applies it.
    ///
    /// A value outside the catalog is still persisted and has no effect;
    /// use [`TokenStore::try_set`] to refuse it instead.
    pub fn set(&self, key: SettingKey, value: &str) {
        if !self.is_valid(key, value) {
            tracing::warn!(%key, value, "value is not in the catalog, setting will have no effect");
        }
        self.preferences.set(&key.storage_key(), value);
        self.apply(key, value);
    }

    pub fn try_set(&self, key: SettingKey, value: &str) -> Result<(), DesignError> {
        if !self.is_valid(key, value) {
            return Err(DesignError::UnknownValue {
                key,
                value: value.to_owned(),
            });
        }
        self.set(key, value);
        Ok(())
    }

    /// String keyed [`TokenStore::set`]. Unknown keys are ignored.
    pub fn set_by_name(&self, key: &str, value: &str) {
        match key.parse() {
            Ok(key) => self.set(key, value),
            Err(e) => tracing::debug!("ignored: {e}"),
        }
    }

    /// Writes the resolved payload of `value` as style variables.
    /// Scales write every label in one call. Unknown values are a no-op.
    pub fn apply(&self, key: SettingKey, value: &str) {
        let Some(payload) = key.setting().lookup(value) else {
            tracing::debug!(%key, value, "nothing to apply");
            return;
        };

        match payload {
            Payload::Font(raw) | Payload::Dimension(raw) => {
                self.write(key.property(), &key.property_value(raw));
            }
            Payload::Scale(scale) => {
                for (label, raw) in scale {
                    let name = format!("{}-{label}", key.property());
                    self.write(&name, &key.property_value(raw));
                }
            }
        }
    }

    /// String keyed [`TokenStore::apply`]. Unknown keys are ignored.
    pub fn apply_by_name(&self, key: &str, value: &str) {
        if let Ok(key) = key.parse() {
            self.apply(key, value);
        }
    }

    /// Applies the current value of every setting. Run once before first paint.
    pub fn apply_all(&self) {
        for key in SettingKey::ALL {
            self.apply(key, &self.get(key));
        }
    }

    /// Forgets every override and returns the page to its defaults.
    pub fn reset(&self) {
        for key in SettingKey::ALL {
            self.preferences.remove(&key.storage_key());
        }
        if let Err(e) = self.style.clear_properties() {
            tracing::warn!(error = %e, "failed to clear inline styles");
        }
        self.apply_all();
        tracing::debug!("design settings reset");
    }

    pub fn defaults(&self) -> impl Iterator<Item = (SettingKey, &'static str)> {
        SettingKey::ALL
            .into_iter()
            .map(|key| (key, key.default_value()))
    }

    fn write(&self, name: &str, value: &str) {
        if let Err(e) = self.style.set_property(name, value) {
            tracing::warn!(error = %e, "failed to apply style variable");
        }
    }
}

impl PartialEq for TokenStore {
    fn eq(&self, other: &Self) -> bool {
        self.preferences.same_backend(&other.preferences) && Rc::ptr_eq(&self.style, &other.style)
    }
}

impl fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("TokenStore");
        for key in SettingKey::ALL {
            s.field(key.as_str(), &self.get(key));
        }
        s.finish()
    }
}
