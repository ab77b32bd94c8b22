pub mod category;
pub mod parser;
pub mod types;

// Re-export main types
pub use category::{
    classify, classify_css_property, classify_parsed, looks_like_color_value, PropertyCategory,
};
pub use parser::{parse_class, ParseError};
pub use types::{parse_modifiers_from_raw, ArbitraryValue, Modifier, ParsedClass, ParsedValue};
