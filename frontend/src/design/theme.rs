use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use std::str::FromStr;

use yew::Callback;

use super::storage::Preferences;
use super::style::StyleEnvironment;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemeId {
    Seoul,
    Tokyo,
    Shanghai,
    Hanoi,
    Kyoto,
    Busan,
    Osaka,
    Singapore,
}

impl ThemeId {
    /// Cycling order.
    pub const ALL: [ThemeId; 8] = [
        ThemeId::Seoul,
        ThemeId::Tokyo,
        ThemeId::Shanghai,
        ThemeId::Hanoi,
        ThemeId::Kyoto,
        ThemeId::Busan,
        ThemeId::Osaka,
        ThemeId::Singapore,
    ];

    /// Active when nothing is persisted.
    pub const DEFAULT: ThemeId = ThemeId::Osaka;

    /// Substituted for an unrecognized identifier.
    pub const FALLBACK: ThemeId = ThemeId::Seoul;

    const SESSION_KEY: &'static str = "theme";

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Seoul => "seoul",
            Self::Tokyo => "tokyo",
            Self::Shanghai => "shanghai",
            Self::Hanoi => "hanoi",
            Self::Kyoto => "kyoto",
            Self::Busan => "busan",
            Self::Osaka => "osaka",
            Self::Singapore => "singapore",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Seoul => "Seoul Pop",
            Self::Tokyo => "Tokyo Night",
            Self::Shanghai => "Shanghai Deco",
            Self::Hanoi => "Hanoi Lacquer",
            Self::Kyoto => "Kyoto Zen",
            Self::Busan => "Busan Harbor",
            Self::Osaka => "Osaka Neon",
            Self::Singapore => "Singapore Garden",
        }
    }

    pub fn next(&self) -> Self {
        let index = Self::ALL
            .iter()
            .position(|theme| theme == self)
            .unwrap_or_default();
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl Default for ThemeId {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeId {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|theme| theme.as_str() == s)
            .ok_or_else(|| UnknownTheme(s.to_owned()))
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("theme `{0}` not found")]
pub struct UnknownTheme(pub String);

/// Payload of a theme change notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeChange {
    pub theme: ThemeId,
    pub animate: bool,
}

#[derive(Default)]
struct Listeners {
    next_id: Cell<u64>,
    registered: RefCell<Vec<(u64, Callback<ThemeChange>)>>,
}

/// Registration handle returned by [`ThemeSwitch::subscribe`].
/// Dropping it unregisters the callback.
#[must_use = "the listener is removed as soon as the handle is dropped"]
pub struct ThemeListener {
    id: u64,
    listeners: Weak<Listeners>,
}

impl Drop for ThemeListener {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners
                .registered
                .borrow_mut()
                .retain(|(id, _)| *id != self.id);
        }
    }
}

impl fmt::Debug for ThemeListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeListener").field("id", &self.id).finish()
    }
}

/// Owner of the active theme.
///
/// Clones share listeners and storage; they are handles to the same switch.
#[derive(Clone)]
pub struct ThemeSwitch {
    preferences: Preferences,
    style: Rc<dyn StyleEnvironment>,
    listeners: Rc<Listeners>,
}

impl ThemeSwitch {
    pub fn new(preferences: Preferences, style: Rc<dyn StyleEnvironment>) -> Self {
        Self {
            preferences,
            style,
            listeners: Rc::default(),
        }
    }

    /// Activates the persisted theme, or the default, without a transition.
    pub fn init(&self) -> ThemeId {
        let saved = self
            .preferences
            .get(ThemeId::SESSION_KEY)
            .unwrap_or_else(|| ThemeId::DEFAULT.as_str().to_owned());
        self.set_theme(&saved, false)
    }

    /// Activates `identifier`, or [`ThemeId::FALLBACK`] when it names no
    /// theme. Returns the theme actually applied.
    pub fn set_theme(&self, identifier: &str, animate: bool) -> ThemeId {
        let theme = identifier.parse().unwrap_or_else(|e: UnknownTheme| {
            tracing::warn!("{e}, using {}", ThemeId::FALLBACK);
            ThemeId::FALLBACK
        });
        self.activate(theme, animate)
    }

    pub fn activate(&self, theme: ThemeId, animate: bool) -> ThemeId {
        if let Err(e) = self.style.set_theme_marker(theme) {
            tracing::warn!(error = %e, "failed to mark theme on the document");
        }
        self.preferences.set(ThemeId::SESSION_KEY, theme.as_str());
        tracing::debug!(%theme, animate, "theme changed");

        self.emit(ThemeChange { theme, animate });

        if animate {
            if let Err(e) = self.style.flash_transition() {
                tracing::debug!(error = %e, "skipped theme transition");
            }
        }

        theme
    }

    /// The persisted theme, or the default when none is stored or the
    /// stored value names no theme.
    pub fn get_theme(&self) -> ThemeId {
        self.preferences
            .get(ThemeId::SESSION_KEY)
            .and_then(|saved| saved.parse().ok())
            .unwrap_or(ThemeId::DEFAULT)
    }

    /// Next theme in [`ThemeId::ALL`]. A stored value that names no theme
    /// restarts the cycle at the first one.
    pub fn cycle_theme(&self) -> ThemeId {
        let next = match self.preferences.get(ThemeId::SESSION_KEY) {
            None => ThemeId::DEFAULT.next(),
            Some(saved) => saved
                .parse::<ThemeId>()
                .map(|theme| theme.next())
                .unwrap_or(ThemeId::ALL[0]),
        };
        self.activate(next, true)
    }

    /// Registers `callback` for every following change. There is no replay:
    /// a late subscriber reads [`ThemeSwitch::get_theme`] to catch up.
    pub fn subscribe(&self, callback: Callback<ThemeChange>) -> ThemeListener {
        let id = self.listeners.next_id.get();
        self.listeners.next_id.set(id + 1);
        self.listeners
            .registered
            .borrow_mut()
            .push((id, callback));

        ThemeListener {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.registered.borrow().len()
    }

    fn emit(&self, change: ThemeChange) {
        // snapshot, so a callback may subscribe or drop its handle
        let callbacks: Vec<_> = self
            .listeners
            .registered
            .borrow()
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();

        for callback in callbacks {
            callback.emit(change);
        }
    }
}

impl PartialEq for ThemeSwitch {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.listeners, &other.listeners)
    }
}

impl fmt::Debug for ThemeSwitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeSwitch")
            .field("theme", &self.get_theme())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::storage::MemoryStorage;
    use crate::design::style::MemoryStyle;

    fn switch() -> (MemoryStorage, MemoryStyle, ThemeSwitch) {
        let storage = MemoryStorage::new();
        let style = MemoryStyle::new();
        let switch = ThemeSwitch::new(
            Preferences::new(Rc::new(storage.clone())),
            Rc::new(style.clone()),
        );
        (storage, style, switch)
    }

    fn recorder(switch: &ThemeSwitch) -> (Rc<RefCell<Vec<ThemeChange>>>, ThemeListener) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let listener = switch.subscribe(Callback::from({
            let seen = seen.clone();
            move |change| seen.borrow_mut().push(change)
        }));
        (seen, listener)
    }

    #[test]
    fn names_round_trip() {
        for theme in ThemeId::ALL {
            assert_eq!(theme.as_str().parse::<ThemeId>(), Ok(theme));
        }
    }

    #[test]
    fn next_wraps_past_the_last_theme() {
        assert_eq!(ThemeId::Seoul.next(), ThemeId::Tokyo);
        assert_eq!(ThemeId::Singapore.next(), ThemeId::Seoul);
    }

    #[test]
    fn init_without_saved_theme_uses_default_silently() {
        let (storage, style, switch) = switch();
        let (seen, _listener) = recorder(&switch);

        assert_eq!(switch.init(), ThemeId::Osaka);
        assert_eq!(switch.get_theme(), ThemeId::Osaka);
        assert_eq!(style.theme_marker(), Some(ThemeId::Osaka));
        assert_eq!(storage.raw_get("theme").as_deref(), Some("osaka"));
        assert_eq!(style.transitions(), 0);
        assert_eq!(
            *seen.borrow(),
            vec![ThemeChange {
                theme: ThemeId::Osaka,
                animate: false
            }]
        );
    }

    #[test]
    fn init_restores_saved_theme() {
        let (storage, style, switch) = switch();
        storage.raw_set("theme", "hanoi");
        assert_eq!(switch.init(), ThemeId::Hanoi);
        assert_eq!(style.theme_marker(), Some(ThemeId::Hanoi));
    }

    #[test]
    fn init_with_corrupt_saved_theme_falls_back() {
        let (storage, _style, switch) = switch();
        storage.raw_set("theme", "atlantis");
        assert_eq!(switch.get_theme(), ThemeId::Osaka);
        assert_eq!(switch.init(), ThemeId::Seoul);
        assert_eq!(storage.raw_get("theme").as_deref(), Some("seoul"));
    }

    #[test]
    fn init_with_empty_saved_theme_uses_default() {
        let (storage, _style, switch) = switch();
        storage.raw_set("theme", "");
        assert_eq!(switch.get_theme(), ThemeId::Osaka);
        assert_eq!(switch.init(), ThemeId::Osaka);
        assert_eq!(storage.raw_get("theme").as_deref(), Some("osaka"));
    }

    #[test]
    fn cycle_without_saved_theme_follows_default() {
        let (_storage, _style, switch) = switch();
        assert_eq!(switch.cycle_theme(), ThemeId::Singapore);
    }

    #[test]
    fn cycle_from_corrupt_saved_theme_restarts_at_first() {
        let (storage, _style, switch) = switch();
        storage.raw_set("theme", "atlantis");
        assert_eq!(switch.cycle_theme(), ThemeId::Seoul);
        assert_eq!(switch.cycle_theme(), ThemeId::Tokyo);
    }

    #[test]
    fn animated_change_flashes_once() {
        let (_storage, style, switch) = switch();
        switch.set_theme("tokyo", true);
        switch.set_theme("busan", false);
        assert_eq!(style.transitions(), 1);
    }

    #[test]
    fn dropped_listener_is_not_called() {
        let (_storage, _style, switch) = switch();
        let (seen, listener) = recorder(&switch);
        assert_eq!(switch.listener_count(), 1);

        drop(listener);
        assert_eq!(switch.listener_count(), 0);

        switch.set_theme("kyoto", true);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn listeners_run_in_registration_order() {
        let (_storage, _style, switch) = switch();
        let order = Rc::new(RefCell::new(Vec::new()));

        let _first = switch.subscribe(Callback::from({
            let order = order.clone();
            move |_| order.borrow_mut().push("first")
        }));
        let _second = switch.subscribe(Callback::from({
            let order = order.clone();
            move |_| order.borrow_mut().push("second")
        }));

        switch.cycle_theme();
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn listener_may_subscribe_during_emit() {
        let (_storage, _style, switch) = switch();
        let late = Rc::new(RefCell::new(None));

        let _listener = switch.subscribe(Callback::from({
            let switch = switch.clone();
            let late = late.clone();
            move |_| {
                late.borrow_mut()
                    .get_or_insert_with(|| switch.subscribe(Callback::noop()));
            }
        }));

        switch.set_theme("kyoto", false);
        assert_eq!(switch.listener_count(), 2);
    }

    #[test]
    fn clones_share_listeners() {
        let (_storage, _style, switch) = switch();
        let (seen, _listener) = recorder(&switch);
        let other = switch.clone();
        assert_eq!(switch, other);

        other.set_theme("shanghai", true);
        assert_eq!(seen.borrow().len(), 1);
    }
}
