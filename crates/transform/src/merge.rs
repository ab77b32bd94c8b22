use crosswind_tw_parse::{classify_parsed, parse_class, PropertyCategory};

/// 归类后的 class
#[derive(Debug, Clone, PartialEq, Eq)]
struct ClassInfo {
    category: Option<PropertyCategory>,
    /// 是否带变体前缀（`lg:`、`hover:`）
    has_variant: bool,
    /// 去掉变体前缀后的部分
    utility: String,
}

impl ClassInfo {
    fn of(class: &str) -> Self {
        match parse_class(class) {
            Ok(parsed) => Self {
                category: classify_parsed(&parsed),
                has_variant: parsed.has_variant(),
                utility: parsed.utility(),
            },
            Err(_) => Self {
                category: None,
                has_variant: false,
                utility: class.to_string(),
            },
        }
    }

    /// 同类别、同前缀形态且去掉前缀后相同
    fn duplicates(&self, existing: &ClassInfo) -> bool {
        self.category.is_some()
            && self.category == existing.category
            && self.has_variant == existing.has_variant
            && self.utility == existing.utility
    }
}

/// 把新生成的 class 合并进已有的 class 列表
///
/// - 已有的 class 保持原顺序，从不删除
/// - 新 class 与结果中已有的字符串完全相同：跳过
/// - 已有 class 中存在同类别、同前缀形态、去掉前缀后相同的：跳过
/// - 其余情况追加到末尾
///
/// 同类别但值不同的两个 class 会同时保留（如 `text-sm` 与 `text-lg`）。
///
/// # 示例
///
/// ```
/// use crosswind_transform::merge::merge_classes;
///
/// let existing = vec!["text-sm".to_string(), "font-bold".to_string()];
/// let new = vec!["text-lg".to_string(), "font-bold".to_string()];
/// assert_eq!(merge_classes(&existing, &new), vec!["text-sm", "font-bold", "text-lg"]);
/// ```
pub fn merge_classes(existing: &[String], new: &[String]) -> Vec<String> {
    let existing_info: Vec<ClassInfo> = existing.iter().map(|c| ClassInfo::of(c)).collect();
    let mut merged = existing.to_vec();

    for class in new {
        if merged.contains(class) {
            tracing::debug!("Skipping duplicate class: {}", class);
            continue;
        }

        let info = ClassInfo::of(class);
        if let Some(conflict) = existing_info.iter().position(|e| info.duplicates(e)) {
            tracing::debug!(
                "Skipping {}: already covered by {}",
                class,
                existing[conflict]
            );
            continue;
        }

        merged.push(class.clone());
    }

    merged
}

/// 按空白切分 class 字符串
pub fn split_classes(classes: &str) -> Vec<String> {
    classes.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn classes(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_same_category_different_value_both_survive() {
        let result = merge_classes(&classes(&["text-sm", "font-bold"]), &classes(&["text-lg"]));
        assert_eq!(result, vec!["text-sm", "font-bold", "text-lg"]);
    }

    #[test]
    fn test_merge_into_self_is_idempotent() {
        let generated = classes(&["text-[#272727]", "text-base", "lg:p-[8px]", "flex"]);
        assert_eq!(merge_classes(&generated, &generated), generated);
    }

    #[test]
    fn test_variant_and_plain_are_different_contexts() {
        let result = merge_classes(&classes(&["text-sm"]), &classes(&["lg:text-sm"]));
        assert_eq!(result, vec!["text-sm", "lg:text-sm"]);

        let result = merge_classes(&classes(&["hover:underline"]), &classes(&["underline"]));
        assert_eq!(result, vec!["hover:underline", "underline"]);
    }

    #[test]
    fn test_same_utility_under_other_variant_is_dropped() {
        let result = merge_classes(&classes(&["md:text-sm"]), &classes(&["lg:text-sm"]));
        assert_eq!(result, vec!["md:text-sm"]);
    }

    #[test]
    fn test_unclassified_uses_exact_dedup() {
        let result = merge_classes(
            &classes(&["flex", "items-center"]),
            &classes(&["flex", "[text-wrap:balance]", "flex"]),
        );
        assert_eq!(result, vec!["flex", "items-center", "[text-wrap:balance]"]);
    }

    #[test]
    fn test_arbitrary_property_is_not_a_variant() {
        let result = merge_classes(
            &classes(&["[font-style:oblique]"]),
            &classes(&["[font-style:oblique]", "hover:[font-style:oblique]"]),
        );
        assert_eq!(
            result,
            vec!["[font-style:oblique]", "hover:[font-style:oblique]"]
        );
    }

    #[test]
    fn test_existing_classes_are_never_removed() {
        let existing = classes(&["text-[#000]", "rounded", "border"]);
        let result = merge_classes(&existing, &classes(&["text-[#272727]", "rounded-[8px]"]));
        assert_eq!(&result[..3], &existing[..]);
        assert_eq!(result.len(), 5);
    }

    #[test]
    fn test_two_new_classes_of_same_category_both_survive() {
        // 新 class 之间不互相比较类别
        let result = merge_classes(&classes(&["text-sm"]), &classes(&["text-lg", "text-xl"]));
        assert_eq!(result, vec!["text-sm", "text-lg", "text-xl"]);
    }

    #[test]
    fn test_unparseable_existing_class_is_kept() {
        let result = merge_classes(&classes(&["w-[10px"]), &classes(&["w-[10px]"]));
        assert_eq!(result, vec!["w-[10px", "w-[10px]"]);
    }

    #[test]
    fn test_split_classes() {
        assert_eq!(split_classes("  a  b\nc "), vec!["a", "b", "c"]);
        assert!(split_classes("   ").is_empty());
    }
}
