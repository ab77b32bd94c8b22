use serde::{Deserialize, Serialize};

/// 解析后值的一个片段
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "camelCase")]
pub enum ValuePart {
    /// CSS 中的字面文本（含 var() 的 fallback）
    Literal(String),
    /// 从变量字典替换而来的 Tailwind token
    FromDictionary(String),
}

impl ValuePart {
    pub fn text(&self) -> &str {
        match self {
            ValuePart::Literal(s) | ValuePart::FromDictionary(s) => s,
        }
    }

    pub fn is_from_dictionary(&self) -> bool {
        matches!(self, ValuePart::FromDictionary(_))
    }
}

/// 解析完成的 CSS 值
///
/// 由若干片段组成：`1px solid var(--Border, #ccc)` 在字典命中时为
/// `[Literal("1px solid "), FromDictionary("line")]`。
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedValue {
    parts: Vec<ValuePart>,
}

impl ResolvedValue {
    /// 纯字面值
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            parts: vec![ValuePart::Literal(text.into())],
        }
    }

    /// 整体来自字典的值
    pub fn from_dictionary(token: impl Into<String>) -> Self {
        Self {
            parts: vec![ValuePart::FromDictionary(token.into())],
        }
    }

    /// 由片段构建，相邻的字面片段会被合并
    pub fn from_parts(parts: impl IntoIterator<Item = ValuePart>) -> Self {
        let mut merged: Vec<ValuePart> = Vec::new();
        for part in parts {
            if let ValuePart::Literal(next) = &part {
                if next.is_empty() {
                    continue;
                }
                if let Some(ValuePart::Literal(prev)) = merged.last_mut() {
                    prev.push_str(next);
                    continue;
                }
            }
            merged.push(part);
        }
        Self { parts: merged }
    }

    pub fn parts(&self) -> &[ValuePart] {
        &self.parts
    }

    /// 整个值（忽略首尾空白）恰好是一个字典 token 时返回该 token
    pub fn as_dictionary(&self) -> Option<&str> {
        let mut meaningful = self
            .parts
            .iter()
            .filter(|p| !matches!(p, ValuePart::Literal(s) if s.trim().is_empty()));

        match (meaningful.next(), meaningful.next()) {
            (Some(ValuePart::FromDictionary(token)), None) => Some(token),
            _ => None,
        }
    }

    /// 是否包含任何字典片段
    pub fn has_dictionary_part(&self) -> bool {
        self.parts.iter().any(ValuePart::is_from_dictionary)
    }

    /// 拼接成 CSS 文本（字典 token 原样代入）
    pub fn to_css_string(&self) -> String {
        let joined: String = self.parts.iter().map(ValuePart::text).collect();
        joined.trim().to_string()
    }

    /// 是否为空值
    pub fn is_blank(&self) -> bool {
        self.parts.iter().all(|p| p.text().trim().is_empty())
    }

    /// 按括号外的空白切分为 token
    ///
    /// `rgba(0, 0, 0, 0.1)` 这类函数值整体作为一个 token。
    /// 只由单个字典片段组成的 token 保留字典标记，
    /// 与字面文本粘连的 token 退化为字面值。
    pub fn tokens(&self) -> Vec<ValuePart> {
        let mut tokens = Vec::new();
        let mut builder = TokenBuilder::default();
        let mut depth = 0usize;

        for part in &self.parts {
            match part {
                ValuePart::Literal(text) => {
                    for ch in text.chars() {
                        match ch {
                            '(' => depth += 1,
                            ')' => depth = depth.saturating_sub(1),
                            _ => {}
                        }
                        if ch.is_whitespace() && depth == 0 {
                            builder.flush_into(&mut tokens);
                        } else {
                            builder.push_literal(ch);
                        }
                    }
                }
                ValuePart::FromDictionary(token) => builder.push_dictionary(token),
            }
        }
        builder.flush_into(&mut tokens);

        tokens
    }
}

impl std::fmt::Display for ResolvedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_css_string())
    }
}

#[derive(Default)]
struct TokenBuilder {
    text: String,
    dictionary_parts: usize,
    has_literal: bool,
}

impl TokenBuilder {
    fn push_literal(&mut self, ch: char) {
        self.text.push(ch);
        self.has_literal = true;
    }

    fn push_dictionary(&mut self, token: &str) {
        self.text.push_str(token);
        self.dictionary_parts += 1;
    }

    fn flush_into(&mut self, tokens: &mut Vec<ValuePart>) {
        if self.text.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.text);
        if self.dictionary_parts == 1 && !self.has_literal {
            tokens.push(ValuePart::FromDictionary(text));
        } else {
            tokens.push(ValuePart::Literal(text));
        }
        self.dictionary_parts = 0;
        self.has_literal = false;
    }
}

/// CSS 声明
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Declaration {
    /// CSS 属性名（如 "font-size"）
    pub property: String,
    /// 解析后的属性值
    pub value: ResolvedValue,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: ResolvedValue) -> Self {
        Self {
            property: property.into(),
            value,
        }
    }

    /// 字面值声明
    pub fn literal(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(property, ResolvedValue::literal(value))
    }
}

/// 诊断信息
///
/// 转换流程不抛错，被跳过的输入以诊断形式返回给调用方
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub message: String,
}

impl Diagnostic {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Warning,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiagnosticLevel {
    Info,
    Warning,
}
