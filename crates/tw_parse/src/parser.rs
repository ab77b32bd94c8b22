use crate::types::{convert_underscores, ArbitraryValue, ParsedClass, ParsedValue};

/// 解析 Tailwind class 字符串
///
/// 支持的格式：
/// - 简单类：`p-4`, `m-2`, `text-sm`
/// - 修饰符：`hover:text-sm`, `lg:p-4`, `dark:text-white`
/// - 多修饰符：`lg:hover:font-bold`
/// - 负值：`-m-4`, `md:-top-1`
/// - 任意值：`w-[13px]`, `bg-[#ff0000]`, `border-t-[2px]`
/// - 任意属性：`[text-align:left]`, `hover:[font-style:oblique]`
/// - 透明度：`bg-blue-500/50`
/// - 重要性：`p-4!`
///
/// # 示例
///
/// ```
/// use crosswind_tw_parse::parse_class;
///
/// let parsed = parse_class("lg:hover:bg-[#fff]").unwrap();
/// assert_eq!(parsed.raw_modifiers, "lg:hover:");
/// assert_eq!(parsed.plugin, "bg");
/// ```
pub fn parse_class(input: &str) -> Result<ParsedClass, ParseError> {
    if input.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut parser = Parser::new(input);
    parser.parse()
}

/// 解析错误类型
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    EmptyInput,
    InvalidFormat(String),
    UnmatchedBracket,
    MissingPlugin,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::EmptyInput => write!(f, "Empty input"),
            ParseError::InvalidFormat(msg) => write!(f, "Invalid format: {}", msg),
            ParseError::UnmatchedBracket => write!(f, "Unmatched bracket in arbitrary value"),
            ParseError::MissingPlugin => write!(f, "Missing plugin/command"),
        }
    }
}

impl std::error::Error for ParseError {}

/// 内部解析器
struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn parse(&mut self) -> Result<ParsedClass, ParseError> {
        // 1. 解析修饰符（modifier:modifier:...）
        let raw_modifiers = self.parse_modifiers();

        // 2. 任意属性 [prop:value]
        if self.peek() == Some('[') {
            let mut parsed = self.parse_arbitrary_property()?;
            parsed.raw_modifiers = raw_modifiers;
            parsed.important = self.consume_if('!');
            self.expect_end()?;
            return Ok(parsed);
        }

        // 3. 解析负值标记
        let negative = self.consume_if('-');

        // 4. 解析插件和值
        let (plugin, value) = self.parse_plugin_and_value()?;

        // 5. 解析透明度（/50）
        let alpha = self.parse_alpha();

        // 6. 解析重要性（!）
        let important = self.consume_if('!');

        self.expect_end()?;

        Ok(ParsedClass {
            raw_modifiers,
            negative,
            plugin,
            value,
            alpha,
            important,
        })
    }

    /// 解析修饰符前缀，返回原始字符串（含结尾冒号）
    fn parse_modifiers(&mut self) -> String {
        loop {
            let start = self.pos;
            let Some(offset) = self.input[start..].find(':') else {
                break;
            };
            let colon = start + offset;
            let modifier_str = &self.input[start..colon];

            // 冒号后必须还有内容，且修饰符本身不含特殊字符
            if colon + 1 >= self.input.len()
                || modifier_str.is_empty()
                || modifier_str.contains('[')
                || modifier_str.contains('/')
                || modifier_str.contains('!')
            {
                break;
            }

            self.pos = colon + 1;
        }

        self.input[..self.pos].to_string()
    }

    /// 解析任意属性 `[property:value]`
    fn parse_arbitrary_property(&mut self) -> Result<ParsedClass, ParseError> {
        let raw = self.take_bracketed()?;
        let inner = &raw[1..raw.len() - 1];

        let (property, value) = inner.split_once(':').ok_or_else(|| {
            ParseError::InvalidFormat(format!("Arbitrary property without ':' in '{}'", raw))
        })?;

        if property.is_empty() {
            return Err(ParseError::MissingPlugin);
        }

        let arb = ArbitraryValue {
            content: convert_underscores(value),
            raw: raw.to_string(),
        };

        Ok(ParsedClass::new(property.to_string()).with_value(ParsedValue::ArbitraryProperty(arb)))
    }

    /// 解析插件和值
    ///
    /// 策略：扫描整个字符串，找到 `-[` 模式的位置
    /// - 如果存在 `-[`，则将其之前的部分作为 plugin
    /// - 否则，在第一个 `-` 处分割
    fn parse_plugin_and_value(&mut self) -> Result<(String, Option<ParsedValue>), ParseError> {
        let start = self.pos;

        if let Some(offset) = self.input[start..].find("-[") {
            self.pos = start + offset;
        } else {
            while let Some(ch) = self.peek() {
                if matches!(ch, '-' | '[' | '/' | '!') {
                    break;
                }
                self.advance(ch);
            }
        }

        let plugin = self.input[start..self.pos].to_string();

        if plugin.is_empty() {
            return Err(ParseError::MissingPlugin);
        }

        let value = match self.peek() {
            Some('-') => {
                self.pos += 1;

                if self.peek() == Some('[') {
                    Some(ParsedValue::Arbitrary(self.parse_arbitrary_value()?))
                } else {
                    let val = self.parse_standard_value();
                    if val.is_empty() {
                        None
                    } else {
                        Some(ParsedValue::Standard(val))
                    }
                }
            }
            Some('[') => Some(ParsedValue::Arbitrary(self.parse_arbitrary_value()?)),
            _ => None,
        };

        Ok((plugin, value))
    }

    /// 解析标准值，读取直到遇到 /、! 或字符串结尾
    fn parse_standard_value(&mut self) -> String {
        let start = self.pos;

        while let Some(ch) = self.peek() {
            if ch == '/' || ch == '!' {
                break;
            }
            self.advance(ch);
        }

        self.input[start..self.pos].to_string()
    }

    /// 解析任意值（方括号内容）
    fn parse_arbitrary_value(&mut self) -> Result<ArbitraryValue, ParseError> {
        let raw = self.take_bracketed()?;
        Ok(ArbitraryValue::new(raw.to_string()))
    }

    /// 读取一个完整的方括号片段（支持嵌套）
    fn take_bracketed(&mut self) -> Result<&'a str, ParseError> {
        if self.peek() != Some('[') {
            return Err(ParseError::InvalidFormat(
                "Arbitrary value must start with '['".to_string(),
            ));
        }

        let start = self.pos;
        self.pos += 1;

        let mut depth = 1;
        while depth > 0 {
            let Some(ch) = self.peek() else {
                return Err(ParseError::UnmatchedBracket);
            };
            match ch {
                '[' => depth += 1,
                ']' => depth -= 1,
                _ => {}
            }
            self.advance(ch);
        }

        Ok(&self.input[start..self.pos])
    }

    /// 解析透明度修饰符
    fn parse_alpha(&mut self) -> Option<String> {
        if !self.consume_if('/') {
            return None;
        }

        let start = self.pos;
        while let Some(ch) = self.peek() {
            if !ch.is_ascii_alphanumeric() {
                break;
            }
            self.advance(ch);
        }

        let alpha = &self.input[start..self.pos];
        (!alpha.is_empty()).then(|| alpha.to_string())
    }

    /// 确保已解析完整个字符串
    fn expect_end(&self) -> Result<(), ParseError> {
        if self.pos < self.input.len() {
            return Err(ParseError::InvalidFormat(format!(
                "Unexpected characters at position {}: '{}'",
                self.pos,
                &self.input[self.pos..]
            )));
        }
        Ok(())
    }

    /// 消费指定字符（如果存在）
    fn consume_if(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn advance(&mut self, ch: char) {
        self.pos += ch.len_utf8();
    }

    /// 获取当前字符
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }
}
