use std::rc::Rc;

use frontend::design::{DesignSystem, MemoryStorage, MemoryStyle};

/// One page session over `storage`. Building a second one over a clone of
/// the same storage behaves like reloading the page.
pub struct TestSession {
    pub storage: MemoryStorage,
    pub style: MemoryStyle,
    pub design: DesignSystem,
}

impl TestSession {
    pub fn fresh() -> Self {
        Self::over(MemoryStorage::new())
    }

    pub fn over(storage: MemoryStorage) -> Self {
        let style = MemoryStyle::new();
        let design = DesignSystem::new(Rc::new(storage.clone()), Rc::new(style.clone()));
        Self {
            storage,
            style,
            design,
        }
    }

    pub fn reload(&self) -> Self {
        Self::over(self.storage.clone())
    }
}
