// The live style environment: CSS custom properties and the theme marker on
// the document root, read implicitly by the stylesheet.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};

use super::error::StyleError;
use super::theme::ThemeId;

pub type StyleResult<T> = Result<T, StyleError>;

pub const THEME_ATTRIBUTE: &str = "data-theme";

pub trait StyleEnvironment {
    fn set_property(&self, name: &str, value: &str) -> StyleResult<()>;

    /// Drops every inline override so stylesheet values apply again.
    fn clear_properties(&self) -> StyleResult<()>;

    fn set_theme_marker(&self, theme: ThemeId) -> StyleResult<()>;

    /// Brief full-viewport fade that masks a theme swap. Returns once the
    /// steps are scheduled; it never touches design state.
    fn flash_transition(&self) -> StyleResult<()>;
}

const OVERLAY_CSS: &str = "position: fixed; inset: 0; background: var(--color-bg); \
    z-index: 10000; pointer-events: none; opacity: 0;";
// about one frame at 60Hz, so the overlay is laid out at opacity 0 before
// its transition starts
const FRAME_MS: u32 = 16;
const HOLD_MS: u32 = 100;
const FADE_MS: u32 = 150;

/// `document.documentElement` of the running page.
#[derive(Debug, Clone)]
pub struct DocumentStyle {
    document: web_sys::Document,
    root: web_sys::HtmlElement,
}

impl DocumentStyle {
    pub fn detect() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let root = document
            .document_element()?
            .dyn_into::<web_sys::HtmlElement>()
            .ok()?;
        Some(Self { document, root })
    }
}

impl StyleEnvironment for DocumentStyle {
    fn set_property(&self, name: &str, value: &str) -> StyleResult<()> {
        self.root
            .style()
            .set_property(name, value)
            .map_err(|e| rejected(name, e))
    }

    fn clear_properties(&self) -> StyleResult<()> {
        self.root.style().set_css_text("");
        Ok(())
    }

    fn set_theme_marker(&self, theme: ThemeId) -> StyleResult<()> {
        self.root
            .set_attribute(THEME_ATTRIBUTE, theme.as_str())
            .map_err(|e| rejected(THEME_ATTRIBUTE, e))
    }

    fn flash_transition(&self) -> StyleResult<()> {
        let overlay = self
            .document
            .create_element("div")
            .map_err(|e| rejected("overlay", e))?
            .dyn_into::<web_sys::HtmlElement>()
            .map_err(|e| rejected("overlay", e.into()))?;
        overlay.style().set_css_text(OVERLAY_CSS);

        let body = self.document.body().ok_or(StyleError::NoDocument)?;
        body.append_child(&overlay)
            .map_err(|e| rejected("overlay", e))?;

        // Cosmetic only: failures past this point are ignored, and a second
        // theme change may start its own overlay before this one is gone.
        Timeout::new(FRAME_MS, move || {
            let style = overlay.style();
            let _ = style.set_property("transition", "opacity 0.15s ease-out");
            let _ = style.set_property("opacity", "0.5");

            Timeout::new(HOLD_MS, move || {
                let _ = overlay.style().set_property("opacity", "0");
                Timeout::new(FADE_MS, move || overlay.remove()).forget();
            })
            .forget();
        })
        .forget();

        Ok(())
    }
}

fn rejected(name: &str, error: JsValue) -> StyleError {
    StyleError::Rejected {
        name: name.to_owned(),
        reason: format!("{error:?}"),
    }
}

#[derive(Debug, Default)]
struct Recorded {
    properties: BTreeMap<String, String>,
    theme: Option<ThemeId>,
    transitions: usize,
}

/// Records what would be written to a document. Clones share the record.
#[derive(Debug, Clone, Default)]
pub struct MemoryStyle {
    recorded: Rc<RefCell<Recorded>>,
}

impl MemoryStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn property(&self, name: &str) -> Option<String> {
        self.recorded.borrow().properties.get(name).cloned()
    }

    pub fn properties(&self) -> BTreeMap<String, String> {
        self.recorded.borrow().properties.clone()
    }

    pub fn theme_marker(&self) -> Option<ThemeId> {
        self.recorded.borrow().theme
    }

    /// Number of transition overlays started so far.
    pub fn transitions(&self) -> usize {
        self.recorded.borrow().transitions
    }
}

impl StyleEnvironment for MemoryStyle {
    fn set_property(&self, name: &str, value: &str) -> StyleResult<()> {
        self.recorded
            .borrow_mut()
            .properties
            .insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn clear_properties(&self) -> StyleResult<()> {
        self.recorded.borrow_mut().properties.clear();
        Ok(())
    }

    fn set_theme_marker(&self, theme: ThemeId) -> StyleResult<()> {
        self.recorded.borrow_mut().theme = Some(theme);
        Ok(())
    }

    fn flash_transition(&self) -> StyleResult<()> {
        self.recorded.borrow_mut().transitions += 1;
        Ok(())
    }
}
