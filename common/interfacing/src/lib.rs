mod imports;

mod error_body;
mod lead;

pub use error_body::ErrorBody;
pub use lead::{LeadAck, LeadForm};
