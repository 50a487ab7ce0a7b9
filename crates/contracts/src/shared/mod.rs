pub mod localized_text;
pub mod range;
