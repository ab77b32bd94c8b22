pub mod merge;
pub mod prefix;

use crosswind_core::{parse_declarations, Diagnostic, VariableLookup};
use crosswind_tw_map::map_declarations;
use serde::{Deserialize, Serialize};

// Re-exports
pub use crosswind_core::{DictionaryStore, StorageBackend};
pub use merge::{merge_classes, split_classes};
pub use prefix::{apply_prefixes, check_prefixes, parse_prefixes};

/// 转换选项
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransformOptions {
    /// 空白分隔的变体前缀（如 `"lg hover"`），为空时不加前缀
    pub prefixes: String,
    /// 元素上已有的 class，新 class 合并进来
    pub existing_classes: String,
}

impl TransformOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置变体前缀（builder 模式）
    pub fn with_prefixes(mut self, prefixes: impl Into<String>) -> Self {
        self.prefixes = prefixes.into();
        self
    }

    /// 设置已有 class（builder 模式）
    pub fn with_existing_classes(mut self, classes: impl Into<String>) -> Self {
        self.existing_classes = classes.into();
        self
    }
}

/// 转换结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformResult {
    /// 最终输出：合并后的 class，空格分隔
    pub classes: String,
    /// 本次由 CSS 生成（已加前缀）的 class
    pub generated: Vec<String>,
    /// 被跳过的行、未支持的属性、未知前缀
    pub diagnostics: Vec<Diagnostic>,
}

/// 把设计工具导出的 CSS 声明转换为 Tailwind class
///
/// 流程：解析声明 → 映射 utility → 加前缀 → 合并进已有 class。
/// 整个过程不返回错误，无法处理的输入以诊断形式返回。
///
/// # 示例
///
/// ```
/// use crosswind_transform::{transform_css, DictionaryStore, TransformOptions};
///
/// let store = DictionaryStore::in_memory();
/// let result = transform_css(
///     "color: var(--Heading-Font, #272727);\nfont-size: 16px;",
///     &store,
///     &TransformOptions::default(),
/// );
/// assert_eq!(result.classes, "text-[#272727] text-base");
/// ```
pub fn transform_css<L>(css: &str, lookup: &L, options: &TransformOptions) -> TransformResult
where
    L: VariableLookup + ?Sized,
{
    let block = parse_declarations(css, lookup);
    let mapped = map_declarations(&block.declarations);
    let generated = apply_prefixes(&mapped.classes, &options.prefixes);

    let existing = split_classes(&options.existing_classes);
    let merged = merge_classes(&existing, &generated);

    let mut diagnostics = block.diagnostics;
    diagnostics.extend(mapped.diagnostics);
    diagnostics.extend(check_prefixes(&options.prefixes));

    tracing::debug!(
        "Transformed {} declarations into {} classes ({} after merge)",
        block.declarations.len(),
        generated.len(),
        merged.len()
    );

    TransformResult {
        classes: merged.join(" "),
        generated,
        diagnostics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_empty_input() {
        let dict: HashMap<String, String> = HashMap::new();
        let result = transform_css("", &dict, &TransformOptions::default());
        assert_eq!(result.classes, "");
        assert!(result.generated.is_empty());
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_existing_classes_only() {
        let dict: HashMap<String, String> = HashMap::new();
        let options = TransformOptions::new().with_existing_classes("flex  gap-2");
        let result = transform_css("not css", &dict, &options);
        assert_eq!(result.classes, "flex gap-2");
        assert_eq!(result.diagnostics.len(), 1);
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: TransformOptions = serde_json::from_str(r#"{"prefixes":"lg"}"#).unwrap();
        assert_eq!(options, TransformOptions::new().with_prefixes("lg"));

        let options: TransformOptions =
            serde_json::from_str(r#"{"existingClasses":"flex"}"#).unwrap();
        assert_eq!(options.existing_classes, "flex");
    }
}
