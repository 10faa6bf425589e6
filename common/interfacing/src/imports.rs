pub use serde::{Deserialize, Serialize};
