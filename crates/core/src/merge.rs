use crate::types::{Declaration, ResolvedValue};
use indexmap::IndexMap;

/// 一段 CSS 输入解析得到的 property → value 映射
///
/// 保持首次出现的顺序，重复属性以最后一次为准
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclarationSet {
    map: IndexMap<String, ResolvedValue>,
}

impl DeclarationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入声明，已存在的属性被覆盖
    pub fn insert(&mut self, declaration: Declaration) {
        self.map.insert(declaration.property, declaration.value);
    }

    pub fn get(&self, property: &str) -> Option<&ResolvedValue> {
        self.map.get(property)
    }

    pub fn contains(&self, property: &str) -> bool {
        self.map.contains_key(property)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResolvedValue)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn properties(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl FromIterator<Declaration> for DeclarationSet {
    fn from_iter<T: IntoIterator<Item = Declaration>>(iter: T) -> Self {
        merge_declarations(iter)
    }
}

/// 合并 CSS 声明
///
/// 功能：
/// - 处理 CSS 属性冲突（后者覆盖前者）
/// - 保持稳定输出顺序（使用 IndexMap）
pub fn merge_declarations(decls: impl IntoIterator<Item = Declaration>) -> DeclarationSet {
    let mut set = DeclarationSet::new();

    for decl in decls {
        // 后者覆盖前者
        set.insert(decl);
    }

    set
}
