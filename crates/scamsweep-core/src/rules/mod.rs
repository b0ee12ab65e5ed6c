pub mod classify;

pub use classify::{classify_scam_type, CLASSIFICATION_RULES};
