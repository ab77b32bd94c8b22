/// 把 CSS 值转成 Tailwind 方括号内可用的形式
///
/// - 逗号和括号旁的空白去掉：`rgba(0, 0, 0, 0.1)` → `rgba(0,0,0,0.1)`
/// - 其余空白折叠为一个 `_`
/// - 双引号换成单引号，原有的 `_` 转义为 `\_`
pub fn escape_arbitrary(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut pending_space = false;

    for ch in value.trim().chars() {
        if ch.is_whitespace() {
            pending_space = true;
            continue;
        }

        if pending_space && !matches!(ch, ',' | ')') && !out.ends_with([',', '(']) {
            out.push('_');
        }
        pending_space = false;

        match ch {
            '"' => out.push('\''),
            '_' => out.push_str("\\_"),
            _ => out.push(ch),
        }
    }

    out
}

/// `[value]`
pub fn format_arbitrary(value: &str) -> String {
    format!("[{}]", escape_arbitrary(value))
}

/// `prefix-[value]`
pub fn arbitrary_utility(prefix: &str, value: &str) -> String {
    format!("{}-{}", prefix, format_arbitrary(value))
}

/// 任意属性写法 `[property:value]`，用于没有对应 utility 的关键字
pub fn arbitrary_property(property: &str, value: &str) -> String {
    format!("[{}:{}]", property, escape_arbitrary(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_value() {
        assert_eq!(arbitrary_utility("text", "#272727"), "text-[#272727]");
        assert_eq!(arbitrary_utility("w", "100%"), "w-[100%]");
    }

    #[test]
    fn test_whitespace_becomes_underscore() {
        assert_eq!(
            arbitrary_utility("shadow", "0px 4px 8px rgba(0, 0, 0, 0.1)"),
            "shadow-[0px_4px_8px_rgba(0,0,0,0.1)]"
        );
        assert_eq!(format_arbitrary("1px   2px"), "[1px_2px]");
    }

    #[test]
    fn test_comma_list_is_compacted() {
        assert_eq!(
            arbitrary_utility("font", "\"Inter\", sans-serif"),
            "font-['Inter',sans-serif]"
        );
        assert_eq!(format_arbitrary("a , b"), "[a,b]");
    }

    #[test]
    fn test_space_inside_parentheses() {
        assert_eq!(format_arbitrary("calc( 100% - 8px )"), "[calc(100%_-_8px)]");
    }

    #[test]
    fn test_underscore_is_escaped() {
        assert_eq!(format_arbitrary("my_font"), "[my\\_font]");
    }

    #[test]
    fn test_arbitrary_property() {
        assert_eq!(
            arbitrary_property("text-decoration-skip-ink", "none"),
            "[text-decoration-skip-ink:none]"
        );
        assert_eq!(
            arbitrary_property("border-width", "1px 0"),
            "[border-width:1px_0]"
        );
    }
}
