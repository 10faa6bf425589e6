pub mod imports;

mod design_controls;
mod design_ctx;
mod design_page;
mod error;
mod home;
mod lead_form;
mod title;

pub mod theme;

pub use design_controls::DesignControls;
pub use design_ctx::{DesignCtx, DesignCtxSub, WithDesign};
pub use design_page::DesignPage;
pub use error::Error;
pub use home::Home;
pub use lead_form::LeadCapture;
pub use title::PageTitle;
