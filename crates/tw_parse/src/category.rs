//! Utility class → governed CSS property category.
//!
//! Classification works on the parsed structure (plugin + value) rather than
//! on raw string prefixes, so `rounded-*` never collides with `border-*` and
//! the result does not depend on the order in which checks are written.

use crate::parser::parse_class;
use crate::types::{ParsedClass, ParsedValue};
use serde::{Deserialize, Serialize};

/// 一个 utility class 所控制的 CSS 属性类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyCategory {
    FontSize,
    FontWeight,
    FontStyle,
    LineHeight,
    LetterSpacing,
    TextDecoration,
    Color,
    BackgroundColor,
    Border,
    BorderRadius,
    Width,
    Height,
    Opacity,
    BoxShadow,
    Spacing,
}

const FONT_SIZE_TOKENS: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];

const FONT_WEIGHT_TOKENS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];

/// `text-*` 中既不是颜色也不是字号的关键字
const TEXT_KEYWORDS: &[&str] = &[
    "left", "center", "right", "justify", "start", "end", "wrap", "nowrap", "balance", "pretty",
    "ellipsis", "clip",
];

/// `bg-*` 中不是背景色的关键字
const BG_KEYWORDS: &[&str] = &[
    "fixed",
    "local",
    "scroll",
    "auto",
    "cover",
    "contain",
    "center",
    "top",
    "bottom",
    "left",
    "right",
    "repeat",
    "no-repeat",
    "repeat-x",
    "repeat-y",
    "none",
];

const SPACING_PLUGINS: &[&str] = &[
    "m", "mx", "my", "mt", "mr", "mb", "ml", "ms", "me", "p", "px", "py", "pt", "pr", "pb", "pl",
    "ps", "pe", "gap", "gap-x", "gap-y", "space",
];

/// 对 class 字符串分类；无法解析或不属于任何类别时返回 None
///
/// # 示例
///
/// ```
/// use crosswind_tw_parse::{classify, PropertyCategory};
///
/// assert_eq!(classify("lg:text-sm"), Some(PropertyCategory::FontSize));
/// assert_eq!(classify("rounded"), Some(PropertyCategory::BorderRadius));
/// assert_eq!(classify("flex"), None);
/// ```
pub fn classify(class: &str) -> Option<PropertyCategory> {
    let parsed = parse_class(class).ok()?;
    classify_parsed(&parsed)
}

/// 对已解析的 class 分类
pub fn classify_parsed(parsed: &ParsedClass) -> Option<PropertyCategory> {
    use PropertyCategory::*;

    let plugin = parsed.plugin.as_str();
    let standard = parsed.value.as_ref().and_then(ParsedValue::as_standard);

    match &parsed.value {
        Some(ParsedValue::ArbitraryProperty(_)) => return classify_css_property(plugin),
        Some(ParsedValue::Arbitrary(arb)) => match plugin {
            "text" => {
                return Some(if is_color_arbitrary(&arb.content) {
                    Color
                } else {
                    FontSize
                })
            }
            "font" => {
                return is_numeric(&arb.content).then_some(FontWeight);
            }
            _ => {}
        },
        _ => {}
    }

    match plugin {
        "text" => match standard {
            Some(v) if FONT_SIZE_TOKENS.contains(&v) => Some(FontSize),
            Some(v) if TEXT_KEYWORDS.contains(&v) => None,
            Some(_) => Some(Color),
            None => None,
        },
        "font" => match standard {
            Some(v) if FONT_WEIGHT_TOKENS.contains(&v) => Some(FontWeight),
            _ => None,
        },
        "italic" if parsed.value.is_none() => Some(FontStyle),
        "not" if standard == Some("italic") => Some(FontStyle),
        "leading" => Some(LineHeight),
        "tracking" => Some(LetterSpacing),
        "underline" | "overline" | "decoration" => Some(TextDecoration),
        "line" if standard == Some("through") => Some(TextDecoration),
        "no" if standard == Some("underline") => Some(TextDecoration),
        "bg" => match standard {
            Some(v) if BG_KEYWORDS.contains(&v) => None,
            _ => Some(BackgroundColor),
        },
        "border" => match standard {
            Some("collapse" | "separate") => None,
            Some(v) if v.starts_with("spacing") => None,
            _ => Some(Border),
        },
        "border-t" | "border-r" | "border-b" | "border-l" | "border-x" | "border-y" => Some(Border),
        "rounded" => Some(BorderRadius),
        p if p.starts_with("rounded-") => Some(BorderRadius),
        "w" | "min-w" | "max-w" => Some(Width),
        "h" | "min-h" | "max-h" => Some(Height),
        "min" | "max" => match standard {
            Some(v) if v.starts_with("w-") => Some(Width),
            Some(v) if v.starts_with("h-") => Some(Height),
            _ => None,
        },
        "opacity" => Some(Opacity),
        "shadow" => Some(BoxShadow),
        p if SPACING_PLUGINS.contains(&p) => Some(Spacing),
        _ => None,
    }
}

/// 任意属性 `[prop:value]` 按 CSS 属性名分类
pub fn classify_css_property(property: &str) -> Option<PropertyCategory> {
    use PropertyCategory::*;

    let is_radius = property.ends_with("-radius");

    match property {
        "font-size" => Some(FontSize),
        "font-weight" => Some(FontWeight),
        "font-style" => Some(FontStyle),
        "line-height" => Some(LineHeight),
        "letter-spacing" => Some(LetterSpacing),
        "color" => Some(Color),
        "background" | "background-color" => Some(BackgroundColor),
        "width" | "min-width" | "max-width" => Some(Width),
        "height" | "min-height" | "max-height" => Some(Height),
        "opacity" => Some(Opacity),
        "box-shadow" => Some(BoxShadow),
        "gap" | "row-gap" | "column-gap" => Some(Spacing),
        p if p.starts_with("text-decoration") || p.starts_with("text-underline") => {
            Some(TextDecoration)
        }
        p if p.starts_with("border") && is_radius => Some(BorderRadius),
        p if (p == "border" || p.starts_with("border-")) && !is_radius => Some(Border),
        p if p.starts_with("margin") || p.starts_with("padding") => Some(Spacing),
        _ => None,
    }
}

/// 判断任意值是否看起来像颜色值
///
/// 用于 `text-[...]` 区分颜色与字号
pub fn looks_like_color_value(value: &str) -> bool {
    value.starts_with('#')
        || value.starts_with("rgb")
        || value.starts_with("hsl")
        || value.starts_with("oklch")
        || value.starts_with("oklab")
        || value.starts_with("color(")
        || value.starts_with("var(")
        || matches!(value, "transparent" | "currentColor" | "currentcolor")
}

fn is_color_arbitrary(content: &str) -> bool {
    // 类型提示：text-[color:var(--x)] / text-[length:var(--x)]
    if let Some(rest) = content.strip_prefix("color:") {
        return !rest.is_empty();
    }
    if content.starts_with("length:") {
        return false;
    }
    looks_like_color_value(content)
}

fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use PropertyCategory::*;

    #[test]
    fn test_text_is_overloaded() {
        assert_eq!(classify("text-sm"), Some(FontSize));
        assert_eq!(classify("text-[17px]"), Some(FontSize));
        assert_eq!(classify("text-[#272727]"), Some(Color));
        assert_eq!(classify("text-primary"), Some(Color));
        assert_eq!(classify("text-center"), None);
    }

    #[test]
    fn test_font_weight_vs_family() {
        assert_eq!(classify("font-bold"), Some(FontWeight));
        assert_eq!(classify("font-[450]"), Some(FontWeight));
        assert_eq!(classify("font-sans"), None);
        assert_eq!(classify("font-['Inter',sans-serif]"), None);
    }

    #[test]
    fn test_rounded_is_not_border() {
        assert_eq!(classify("rounded"), Some(BorderRadius));
        assert_eq!(classify("rounded-[8px]"), Some(BorderRadius));
        assert_eq!(classify("rounded-tl-[4px]"), Some(BorderRadius));
        assert_eq!(classify("[border-top-left-radius:3px]"), Some(BorderRadius));
    }

    #[test]
    fn test_border_forms() {
        assert_eq!(classify("border"), Some(Border));
        assert_eq!(classify("border-t"), Some(Border));
        assert_eq!(classify("border-t-[2px]"), Some(Border));
        assert_eq!(classify("border-solid"), Some(Border));
        assert_eq!(classify("border-[#e5e5e5]"), Some(Border));
        assert_eq!(classify("border-collapse"), None);
    }

    #[test]
    fn test_text_decoration_forms() {
        assert_eq!(classify("underline"), Some(TextDecoration));
        assert_eq!(classify("no-underline"), Some(TextDecoration));
        assert_eq!(classify("line-through"), Some(TextDecoration));
        assert_eq!(classify("decoration-dotted"), Some(TextDecoration));
        assert_eq!(classify("underline-offset-4"), Some(TextDecoration));
        assert_eq!(
            classify("[text-decoration-skip-ink:none]"),
            Some(TextDecoration)
        );
    }

    #[test]
    fn test_sizes_and_spacing() {
        assert_eq!(classify("w-[120px]"), Some(Width));
        assert_eq!(classify("min-w-full"), Some(Width));
        assert_eq!(classify("max-h-[50vh]"), Some(Height));
        assert_eq!(classify("px-[16px]"), Some(Spacing));
        assert_eq!(classify("-mt-[4px]"), Some(Spacing));
        assert_eq!(classify("gap-x-[8px]"), Some(Spacing));
    }

    #[test]
    fn test_misc_categories() {
        assert_eq!(classify("italic"), Some(FontStyle));
        assert_eq!(classify("not-italic"), Some(FontStyle));
        assert_eq!(classify("leading-6"), Some(LineHeight));
        assert_eq!(classify("tracking-wide"), Some(LetterSpacing));
        assert_eq!(classify("bg-[#fff]"), Some(BackgroundColor));
        assert_eq!(classify("bg-cover"), None);
        assert_eq!(classify("opacity-[0.5]"), Some(Opacity));
        assert_eq!(classify("shadow-[0_1px_2px_#000]"), Some(BoxShadow));
    }

    #[test]
    fn test_variants_do_not_change_category() {
        assert_eq!(classify("hover:text-sm"), classify("text-sm"));
        assert_eq!(classify("lg:hover:rounded"), Some(BorderRadius));
    }

    #[test]
    fn test_unclassified() {
        assert_eq!(classify("flex"), None);
        assert_eq!(classify("[text-align:left]"), None);
        assert_eq!(classify("w-[13px"), None);
    }
}
