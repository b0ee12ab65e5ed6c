pub mod category;
pub mod phone;

pub use category::{describe_tag, ScamCategory};
pub use phone::{
    clean_phone_number, format_phone_number, is_valid_phone_number, normalize_phone_number,
};
