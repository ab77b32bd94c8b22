//! Declaration parser: raw CSS text → resolved `property → value` pairs.
//!
//! Input is what design tools put on the clipboard: one `property: value;`
//! per line, with `var(--token, fallback)` references to design variables.

use crate::dictionary::VariableLookup;
use crate::merge::DeclarationSet;
use crate::types::{Declaration, Diagnostic, ResolvedValue, ValuePart};
use regex::Regex;
use std::sync::LazyLock;

static DECLARATION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z-]+)\s*:\s*(.+?)\s*;").expect("declaration pattern is valid")
});

/// 一段 CSS 输入的解析结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedBlock {
    pub declarations: DeclarationSet,
    /// 被跳过的行
    pub diagnostics: Vec<Diagnostic>,
}

/// 解析多行 CSS 声明
///
/// - 按行切分并 trim，丢弃空行
/// - 不符合 `property: value;` 的行被跳过（记录诊断，不报错）
/// - 重复属性以最后一次为准
///
/// # 示例
///
/// ```
/// use crosswind_core::declaration::parse_declarations;
/// use std::collections::HashMap;
///
/// let dict: HashMap<String, String> = HashMap::new();
/// let block = parse_declarations("color: var(--Heading, #272727);\nfont-size: 16px;", &dict);
/// assert_eq!(block.declarations.get("color").unwrap().to_css_string(), "#272727");
/// assert_eq!(block.declarations.len(), 2);
/// ```
pub fn parse_declarations<L>(css: &str, lookup: &L) -> ParsedBlock
where
    L: VariableLookup + ?Sized,
{
    let mut block = ParsedBlock::default();

    for line in css.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match parse_line(line, lookup) {
            Some(decl) => block.declarations.insert(decl),
            None => {
                tracing::debug!("Skipping non-declaration line: {}", line);
                block
                    .diagnostics
                    .push(Diagnostic::info(format!("Skipped line: {}", line)));
            }
        }
    }

    block
}

/// 解析单行声明
pub fn parse_line<L>(line: &str, lookup: &L) -> Option<Declaration>
where
    L: VariableLookup + ?Sized,
{
    let caps = DECLARATION_LINE.captures(line)?;
    let property = caps.get(1)?.as_str().to_ascii_lowercase();
    let value = resolve_value(caps.get(2)?.as_str(), lookup);

    if value.is_blank() {
        return None;
    }

    Some(Declaration::new(property, value))
}

/// 展开值中的所有 `var()` 引用
///
/// - 字典命中：替换为带字典标记的片段
/// - 未命中：使用 fallback（递归展开，去掉一层引号）
/// - 无 fallback 且未命中：保留原始 `var(...)` 文本
///
/// 引用之外的文本原样保留
pub fn resolve_value<L>(raw: &str, lookup: &L) -> ResolvedValue
where
    L: VariableLookup + ?Sized,
{
    let mut parts = Vec::new();
    let mut rest = raw;

    while let Some(start) = find_var_call(rest) {
        parts.push(ValuePart::Literal(rest[..start].to_string()));

        let args_start = start + "var(".len();
        let Some(call) = split_var_call(&rest[args_start..]) else {
            // 括号不配对：剩余部分按字面处理
            parts.push(ValuePart::Literal(rest[start..].to_string()));
            rest = "";
            break;
        };

        parts.extend(resolve_var(&call, lookup));
        rest = &rest[args_start + call.consumed..];
    }

    parts.push(ValuePart::Literal(rest.to_string()));
    ResolvedValue::from_parts(parts)
}

/// `var(` 之后的参数拆分结果
struct VarCall<'a> {
    name: &'a str,
    fallback: Option<&'a str>,
    /// 包括右括号在内消费的字节数
    consumed: usize,
}

fn resolve_var<L>(call: &VarCall<'_>, lookup: &L) -> Vec<ValuePart>
where
    L: VariableLookup + ?Sized,
{
    if let Some(token) = lookup.lookup(call.name) {
        tracing::debug!("Resolved {} from dictionary: {}", call.name, token);
        return vec![ValuePart::FromDictionary(token.to_string())];
    }

    match call.fallback {
        Some(fallback) => {
            let nested = resolve_value(fallback, lookup);
            if nested.has_dictionary_part() {
                nested.parts().to_vec()
            } else {
                let text = nested.to_css_string();
                vec![ValuePart::Literal(strip_quotes(&text).to_string())]
            }
        }
        None => vec![ValuePart::Literal(format!("var({})", call.name))],
    }
}

/// 查找独立的 `var(` 调用（排除 `somevar(` 之类的函数名）
fn find_var_call(s: &str) -> Option<usize> {
    let mut offset = 0;
    while let Some(found) = s[offset..].find("var(") {
        let idx = offset + found;
        let preceded_by_ident = s[..idx]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !preceded_by_ident {
            return Some(idx);
        }
        offset = idx + "var(".len();
    }
    None
}

/// 在 `var(` 之后按括号深度找到对应的 `)`，并在第一个顶层逗号处拆分
fn split_var_call(args: &str) -> Option<VarCall<'_>> {
    let mut depth = 1usize;
    let mut comma = None;

    for (idx, ch) in args.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    let (name, fallback) = match comma {
                        Some(c) => (&args[..c], Some(args[c + 1..idx].trim())),
                        None => (&args[..idx], None),
                    };
                    return Some(VarCall {
                        name: name.trim(),
                        fallback,
                        consumed: idx + 1,
                    });
                }
            }
            ',' if depth == 1 && comma.is_none() => comma = Some(idx),
            _ => {}
        }
    }

    None
}

/// 去掉一层成对的首尾引号
fn strip_quotes(s: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = s
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn dict(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_simple_lines() {
        let block = parse_declarations("color: #272727;\n\n  font-size: 16px;  \n", &dict(&[]));
        assert_eq!(block.declarations.len(), 2);
        assert_eq!(
            block.declarations.get("font-size").unwrap(),
            &ResolvedValue::literal("16px")
        );
        assert!(block.diagnostics.is_empty());
    }

    #[test]
    fn test_non_matching_lines_are_skipped() {
        let css = "/* Heading */\ncolor: red\nwidth: 10px;\n.foo {";
        let block = parse_declarations(css, &dict(&[]));
        assert_eq!(
            block.declarations.properties().collect::<Vec<_>>(),
            vec!["width"]
        );
        assert_eq!(block.diagnostics.len(), 3);
    }

    #[test]
    fn test_value_is_shortest_run_to_semicolon() {
        let decl = parse_line("width: 10px; height: 20px;", &dict(&[])).unwrap();
        assert_eq!(decl.property, "width");
        assert_eq!(decl.value.to_css_string(), "10px");
    }

    #[test]
    fn test_property_name_letters_and_hyphens_only() {
        assert!(parse_line("font_size: 10px;", &dict(&[])).is_none());
        assert!(parse_line("h1: 10px;", &dict(&[])).is_none());
        assert_eq!(
            parse_line("Font-Size: 10px;", &dict(&[])).unwrap().property,
            "font-size"
        );
    }

    #[test]
    fn test_later_duplicates_win() {
        let block = parse_declarations("color: red;\nwidth: 1px;\ncolor: blue;", &dict(&[]));
        assert_eq!(
            block.declarations.get("color").unwrap().to_css_string(),
            "blue"
        );
        assert_eq!(
            block.declarations.properties().collect::<Vec<_>>(),
            vec!["color", "width"]
        );
    }

    #[test]
    fn test_var_dictionary_hit_is_tagged() {
        let d = dict(&[("--Heading-Font", "heading")]);
        let value = resolve_value("var(--Heading-Font, #272727)", &d);
        assert_eq!(value, ResolvedValue::from_dictionary("heading"));
    }

    #[test]
    fn test_var_miss_uses_unquoted_fallback() {
        let value = resolve_value("var(--Font, 'Inter')", &dict(&[]));
        assert_eq!(value, ResolvedValue::literal("Inter"));

        let value = resolve_value("var(--Font, \"Inter Tight\")", &dict(&[]));
        assert_eq!(value, ResolvedValue::literal("Inter Tight"));
    }

    #[test]
    fn test_var_name_is_trimmed() {
        let d = dict(&[("--Gap", "4")]);
        let value = resolve_value("var( --Gap , 16px)", &d);
        assert_eq!(value.as_dictionary(), Some("4"));
    }

    #[test]
    fn test_multiple_vars_preserve_surrounding_text() {
        let d = dict(&[("--Border", "line")]);
        let value = resolve_value("var(--Width, 1px) solid var(--Border, #E5E5E5)", &d);
        assert_eq!(
            value.parts(),
            &[
                ValuePart::Literal("1px solid ".to_string()),
                ValuePart::FromDictionary("line".to_string()),
            ]
        );
    }

    #[test]
    fn test_fallback_with_function_call() {
        let value = resolve_value("var(--Shadow, 0 1px 2px rgba(0, 0, 0, 0.1))", &dict(&[]));
        assert_eq!(value.to_css_string(), "0 1px 2px rgba(0, 0, 0, 0.1)");

        let d = dict(&[("--Overlay", "overlay")]);
        let value = resolve_value("var(--Overlay, rgba(0, 0, 0, 0.5))", &d);
        assert_eq!(value, ResolvedValue::from_dictionary("overlay"));
    }

    #[test]
    fn test_nested_var_fallback() {
        let d = dict(&[("--Base", "base")]);
        let value = resolve_value("var(--Missing, var(--Base, #000))", &d);
        assert_eq!(value.as_dictionary(), Some("base"));

        let value = resolve_value("var(--Missing, var(--Other, #000))", &d);
        assert_eq!(value, ResolvedValue::literal("#000"));
    }

    #[test]
    fn test_var_without_fallback() {
        let d = dict(&[("--Known", "known")]);
        assert_eq!(
            resolve_value("var(--Known)", &d).as_dictionary(),
            Some("known")
        );
        assert_eq!(
            resolve_value("var(--Unknown)", &d),
            ResolvedValue::literal("var(--Unknown)")
        );
    }

    #[test]
    fn test_value_without_var_is_unchanged() {
        let value = resolve_value("0px 4px 8px rgba(0,0,0,0.1)", &dict(&[]));
        assert_eq!(value, ResolvedValue::literal("0px 4px 8px rgba(0,0,0,0.1)"));
    }

    #[test]
    fn test_unbalanced_var_is_literal() {
        let value = resolve_value("var(--Broken, #fff", &dict(&[]));
        assert_eq!(value, ResolvedValue::literal("var(--Broken, #fff"));
    }
}
