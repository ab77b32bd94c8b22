//! 圆角与边框
//!
//! 边框简写 `1px solid #E5E5E5` 按 token 形状拆成宽度、样式、颜色三类 class，
//! 按 token 在值中的顺序输出。

use super::{arbitrary_property, arbitrary_utility};
use crate::plugin_map::get_property_plugin;
use crate::value_map::{is_border_style, is_zero, looks_like_length, lookup, Table, SUPPRESSED};
use crosswind_core::{ResolvedValue, ValuePart};

pub(super) const RADIUS_PROPERTIES: &[&str] = &[
    "border-radius",
    "border-top-left-radius",
    "border-top-right-radius",
    "border-bottom-right-radius",
    "border-bottom-left-radius",
];

pub(super) const BORDER_PROPERTIES: &[&str] = &[
    "border",
    "border-top",
    "border-bottom",
    "border-left",
    "border-right",
    "border-width",
    "border-style",
    "border-color",
];

pub(super) fn map_radius(property: &str, value: &ResolvedValue) -> Vec<String> {
    let Some(prefix) = get_property_plugin(property) else {
        return Vec::new();
    };

    let class = match value.as_dictionary() {
        Some(token) => format!("{}-{}", prefix, token),
        None => {
            let css = value.to_css_string();
            match lookup(Table::Radius, &css) {
                Some(_) => prefix.to_string(),
                None => arbitrary_utility(prefix, &css),
            }
        }
    };
    vec![class]
}

pub(super) fn map_border(property: &str, value: &ResolvedValue) -> Vec<String> {
    let Some(prefix) = get_property_plugin(property) else {
        return Vec::new();
    };

    let class = match property {
        "border-width" => match single_token(value) {
            Some(ValuePart::FromDictionary(token)) => Some(format!("{}-{}", prefix, token)),
            Some(ValuePart::Literal(text)) => width_class(prefix, &text),
            None => Some(arbitrary_property(property, &value.to_css_string())),
        },
        "border-style" => match value.as_dictionary() {
            Some(token) => Some(format!("border-{}", token)),
            None => style_class(&value.to_css_string()),
        },
        "border-color" => match single_token(value) {
            Some(ValuePart::FromDictionary(token)) => Some(format!("{}-{}", prefix, token)),
            Some(ValuePart::Literal(text)) => color_class(prefix, &text),
            None => Some(arbitrary_property(property, &value.to_css_string())),
        },
        _ => return map_shorthand(prefix, value),
    };
    class.into_iter().collect()
}

/// `border` / `border-top` ... 简写
fn map_shorthand(prefix: &str, value: &ResolvedValue) -> Vec<String> {
    value
        .tokens()
        .into_iter()
        .take(3)
        .filter_map(|token| match token {
            // 字典 token 无论作宽度还是颜色，输出形式相同
            ValuePart::FromDictionary(token) => Some(format!("{}-{}", prefix, token)),
            ValuePart::Literal(text) if is_border_style(&text) => style_class(&text),
            ValuePart::Literal(text) if looks_like_length(&text) => width_class(prefix, &text),
            ValuePart::Literal(text) => color_class(prefix, &text),
        })
        .collect()
}

fn single_token(value: &ResolvedValue) -> Option<ValuePart> {
    let mut tokens = value.tokens();
    if tokens.len() == 1 {
        tokens.pop()
    } else {
        None
    }
}

/// 0 不输出，1px 输出无值形式
fn width_class(prefix: &str, width: &str) -> Option<String> {
    if is_zero(width) {
        return None;
    }
    match width {
        "1px" | "0.0625rem" => Some(prefix.to_string()),
        _ => Some(arbitrary_utility(prefix, width)),
    }
}

/// 样式不区分边，`none` 不输出
fn style_class(style: &str) -> Option<String> {
    match lookup(Table::BorderStyle, style) {
        Some(SUPPRESSED) => None,
        Some(class) => Some(class.to_string()),
        None => Some(arbitrary_property("border-style", style)),
    }
}

/// 透明色不输出
fn color_class(prefix: &str, color: &str) -> Option<String> {
    if color.eq_ignore_ascii_case("transparent") {
        return None;
    }
    Some(arbitrary_utility(prefix, color))
}
