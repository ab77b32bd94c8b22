use serde::{Deserialize, Serialize};

/// 解析后的 class
///
/// `md:hover:-mt-[4px]!` 拆为变体前缀、负号、插件名、值、重要性标记；
/// 任意属性 `[text-align:left]` 的插件名是 CSS 属性名。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedClass {
    /// 变体前缀原文，带结尾冒号（`"md:hover:"`）
    pub raw_modifiers: String,
    pub negative: bool,
    pub plugin: String,
    pub value: Option<ParsedValue>,
    /// `/50` 之类的透明度后缀
    pub alpha: Option<String>,
    pub important: bool,
}

/// 变体前缀
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modifier {
    /// Tailwind 自带的变体
    Builtin(String),
    /// 无法识别的变体，可能由项目配置提供
    Custom(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParsedValue {
    /// 刻度值（`4`、`sm`、`red-500`）
    Standard(String),
    /// `[13px]`
    Arbitrary(ArbitraryValue),
    /// `[text-align:left]`，content 只含冒号后的部分
    ArbitraryProperty(ArbitraryValue),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArbitraryValue {
    /// 含方括号的原文
    pub raw: String,
    /// 去掉方括号并还原下划线后的 CSS 值
    pub content: String,
}

impl ParsedClass {
    pub fn new(plugin: String) -> Self {
        Self {
            raw_modifiers: String::new(),
            negative: false,
            plugin,
            value: None,
            alpha: None,
            important: false,
        }
    }

    pub fn with_value(mut self, value: ParsedValue) -> Self {
        self.value = Some(value);
        self
    }

    /// 是否带变体前缀（`lg:`、`hover:`）
    pub fn has_variant(&self) -> bool {
        !self.raw_modifiers.is_empty()
    }

    /// 去掉变体前缀后的部分：`lg:hover:text-sm` → `text-sm`
    pub fn utility(&self) -> String {
        let mut out = String::new();

        if let Some(ParsedValue::ArbitraryProperty(arb)) = &self.value {
            out.push_str(&arb.raw);
        } else {
            if self.negative {
                out.push('-');
            }
            out.push_str(&self.plugin);
            if let Some(value) = &self.value {
                out.push('-');
                out.push_str(&value.to_string());
            }
            if let Some(alpha) = &self.alpha {
                out.push('/');
                out.push_str(alpha);
            }
        }

        if self.important {
            out.push('!');
        }
        out
    }

    /// 写回完整的 class 字符串
    pub fn to_normalized_string(&self) -> String {
        format!("{}{}", self.raw_modifiers, self.utility())
    }
}

/// 内置的单词变体
const BUILTIN_VARIANTS: &[&str] = &[
    // 断点
    "sm",
    "md",
    "lg",
    "xl",
    "2xl",
    // 交互
    "hover",
    "focus",
    "focus-within",
    "focus-visible",
    "active",
    "visited",
    "target",
    // 表单
    "disabled",
    "enabled",
    "checked",
    "indeterminate",
    "required",
    "invalid",
    "valid",
    "placeholder-shown",
    "read-only",
    "open",
    // 结构
    "first",
    "last",
    "only",
    "odd",
    "even",
    "first-of-type",
    "last-of-type",
    "empty",
    // 伪元素
    "before",
    "after",
    "placeholder",
    "file",
    "marker",
    "selection",
    "first-line",
    "first-letter",
    "backdrop",
    // 媒体与主题
    "dark",
    "print",
    "portrait",
    "landscape",
    "motion-safe",
    "motion-reduce",
    "rtl",
    "ltr",
];

/// 带参数的变体族（`group-hover`、`max-md`、`data-[state=open]` ...）
const BUILTIN_FAMILIES: &[&str] = &[
    "group-",
    "peer-",
    "aria-",
    "data-",
    "supports-",
    "has-",
    "max-",
    "min-",
    "@",
];

impl Modifier {
    /// 按名称判断是否为内置变体
    pub fn parse(name: &str) -> Self {
        let builtin = BUILTIN_VARIANTS.contains(&name)
            || name.starts_with('[')
            || BUILTIN_FAMILIES
                .iter()
                .any(|family| name.len() > family.len() && name.starts_with(family));

        if builtin {
            Modifier::Builtin(name.to_string())
        } else {
            Modifier::Custom(name.to_string())
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Modifier::Builtin(s) | Modifier::Custom(s) => s,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Modifier::Custom(_))
    }
}

impl std::fmt::Display for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// 把 `"hover:md:"` 拆成变体列表
///
/// ```
/// use crosswind_tw_parse::parse_modifiers_from_raw;
///
/// let modifiers = parse_modifiers_from_raw("hover:md:");
/// assert_eq!(modifiers.len(), 2);
/// ```
pub fn parse_modifiers_from_raw(raw: &str) -> Vec<Modifier> {
    raw.split(':')
        .filter(|s| !s.is_empty())
        .map(Modifier::parse)
        .collect()
}

impl ParsedValue {
    /// 刻度值的字符串，任意值返回 None
    pub fn as_standard(&self) -> Option<&str> {
        match self {
            ParsedValue::Standard(s) => Some(s),
            _ => None,
        }
    }
}

impl std::fmt::Display for ParsedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParsedValue::Standard(s) => f.write_str(s),
            ParsedValue::Arbitrary(arb) | ParsedValue::ArbitraryProperty(arb) => {
                f.write_str(&arb.raw)
            }
        }
    }
}

impl ArbitraryValue {
    pub fn new(raw: String) -> Self {
        let stripped = raw
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
            .unwrap_or(&raw);
        let content = convert_underscores(stripped);
        Self { raw, content }
    }
}

/// `_` 还原为空格，`\_` 还原为下划线
pub(crate) fn convert_underscores(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' if chars.peek() == Some(&'_') => {
                chars.next();
                result.push('_');
            }
            '_' => result.push(' '),
            _ => result.push(ch),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_and_custom_variants() {
        for name in ["lg", "hover", "dark", "group-hover", "max-md", "data-[open]", "@md"] {
            assert!(
                !Modifier::parse(name).is_custom(),
                "{} should be builtin",
                name
            );
        }
        for name in ["tablet", "hovr", "group-", "max-"] {
            assert!(
                Modifier::parse(name).is_custom(),
                "{} should be custom",
                name
            );
        }
    }

    #[test]
    fn test_utility_strips_variants() {
        let mut class =
            ParsedClass::new("p".to_string()).with_value(ParsedValue::Standard("4".to_string()));
        class.raw_modifiers = "md:hover:".to_string();

        assert_eq!(class.to_normalized_string(), "md:hover:p-4");
        assert_eq!(class.utility(), "p-4");
        assert!(class.has_variant());
    }

    #[test]
    fn test_arbitrary_value_underscores() {
        let arb = ArbitraryValue::new("[0_1px_2px_red]".to_string());
        assert_eq!(arb.content, "0 1px 2px red");

        let arb = ArbitraryValue::new("[a_b\\_c_d]".to_string());
        assert_eq!(arb.content, "a b_c d");
    }
}
