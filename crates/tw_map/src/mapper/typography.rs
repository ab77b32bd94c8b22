//! 文本与字体相关属性

use super::{arbitrary_utility, keyword, scaled, utility};
use crate::value_map::{lookup, Table, SUPPRESSED};
use crosswind_core::{ResolvedValue, ValuePart};

pub(super) const TEXT_PROPERTIES: &[&str] = &[
    "color",
    "text-align",
    "text-transform",
    "text-decoration",
    "text-decoration-line",
    "text-decoration-style",
    "text-decoration-color",
    "text-decoration-thickness",
    "text-decoration-skip-ink",
    "text-underline-offset",
    "text-underline-position",
];

pub(super) const FONT_PROPERTIES: &[&str] = &[
    "font-family",
    "font-size",
    "font-weight",
    "font-style",
    "line-height",
    "letter-spacing",
];

pub(super) fn map_text(property: &str, value: &ResolvedValue) -> Vec<String> {
    let class = match property {
        "color" => Some(utility("text", value)),
        "text-align" => keyword(property, Some("text"), value, Table::TextAlign),
        "text-transform" => keyword(property, None, value, Table::TextTransform),
        "text-decoration" => return map_decoration_shorthand(value),
        "text-decoration-line" => keyword(property, None, value, Table::DecorationLine),
        "text-decoration-style" => {
            keyword(property, Some("decoration"), value, Table::DecorationStyle)
        }
        "text-decoration-color" => Some(utility("decoration", value)),
        "text-decoration-thickness" => scaled("decoration", value, Table::DecorationThickness),
        "text-decoration-skip-ink" => keyword(property, None, value, Table::DecorationSkipInk),
        "text-underline-offset" => scaled("underline-offset", value, Table::UnderlineOffset),
        "text-underline-position" => keyword(property, None, value, Table::UnderlinePosition),
        _ => None,
    };
    class.into_iter().collect()
}

pub(super) fn map_font(property: &str, value: &ResolvedValue) -> Vec<String> {
    let class = match property {
        "font-family" => Some(font_family(value)),
        "font-size" => scaled("text", value, Table::FontSize),
        "font-weight" => scaled("font", value, Table::FontWeight),
        "font-style" => keyword(property, None, value, Table::FontStyle),
        "line-height" => scaled("leading", value, Table::LineHeight),
        "letter-spacing" => scaled("tracking", value, Table::LetterSpacing),
        _ => None,
    };
    class.into_iter().collect()
}

/// 字典中的字体 token 可能已带 `font-` 前缀
fn font_family(value: &ResolvedValue) -> String {
    match value.as_dictionary() {
        Some(token) if token.starts_with("font-") => token.to_string(),
        Some(token) => format!("font-{}", token),
        None => arbitrary_utility("font", &value.to_css_string()),
    }
}

/// `text-decoration: underline dotted 2px #f00` 按 token 拆分
fn map_decoration_shorthand(value: &ResolvedValue) -> Vec<String> {
    value
        .tokens()
        .into_iter()
        .filter_map(|token| match token {
            ValuePart::FromDictionary(token) => Some(format!("decoration-{}", token)),
            ValuePart::Literal(text) => decoration_token(&text),
        })
        .collect()
}

fn decoration_token(text: &str) -> Option<String> {
    let known = lookup(Table::DecorationLine, text)
        .or_else(|| lookup(Table::DecorationStyle, text))
        .or_else(|| lookup(Table::DecorationThickness, text));

    match known {
        Some(SUPPRESSED) => None,
        Some(class) => Some(class.to_string()),
        // 长度或颜色，Tailwind 会按值推断
        None if !text.is_empty() => Some(arbitrary_utility("decoration", text)),
        None => None,
    }
}
