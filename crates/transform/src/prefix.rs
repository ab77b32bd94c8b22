use crosswind_core::Diagnostic;
use crosswind_tw_parse::{parse_modifiers_from_raw, Modifier};

/// 解析前缀字符串
///
/// 按空白切分，每项去掉结尾的冒号后补一个：`"lg hover:"` → `["lg:", "hover:"]`
pub fn parse_prefixes(prefixes: &str) -> Vec<String> {
    prefixes
        .split_whitespace()
        .map(|p| p.trim_end_matches(':'))
        .filter(|p| !p.is_empty())
        .map(|p| format!("{}:", p))
        .collect()
}

/// 为每个 class 加上每个前缀
///
/// 按 class 顺序输出，同一 class 的前缀按前缀顺序排列。
/// 没有前缀时原样返回。
///
/// # 示例
///
/// ```
/// use crosswind_transform::prefix::apply_prefixes;
///
/// let classes = vec!["text-sm".to_string()];
/// assert_eq!(apply_prefixes(&classes, "lg hover"), vec!["lg:text-sm", "hover:text-sm"]);
/// assert_eq!(apply_prefixes(&classes, "  "), vec!["text-sm"]);
/// ```
pub fn apply_prefixes(classes: &[String], prefixes: &str) -> Vec<String> {
    let prefixes = parse_prefixes(prefixes);
    if prefixes.is_empty() {
        return classes.to_vec();
    }

    classes
        .iter()
        .flat_map(|class| prefixes.iter().map(move |p| format!("{}{}", p, class)))
        .collect()
}

/// 检查无法识别的变体名
///
/// 只提示，不阻止使用（项目里可能配置了自定义变体）
pub fn check_prefixes(prefixes: &str) -> Vec<Diagnostic> {
    parse_prefixes(prefixes)
        .iter()
        .flat_map(|p| parse_modifiers_from_raw(p))
        .filter(Modifier::is_custom)
        .map(|m| Diagnostic::info(format!("Unknown variant prefix: {}", m)))
        .collect()
}
