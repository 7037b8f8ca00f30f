pub mod inline_style;
pub mod markdown;
