use crate::storage::{MemoryStorage, StorageBackend};
use indexmap::IndexMap;
use std::collections::HashMap;

/// 字典在持久化存储中的固定 key
pub const DICTIONARY_STORAGE_KEY: &str = "crosswind.variables";

/// 字典操作错误
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DictionaryError {
    /// 变量名为空（trim 后）
    #[error("Variable name must not be empty")]
    EmptyName,
    /// Tailwind 值为空（trim 后）
    #[error("Tailwind value for {0} must not be empty")]
    EmptyValue(String),
    /// 批量导入的 JSON 不合法
    #[error("Invalid dictionary import: {0}")]
    InvalidImport(String),
}

/// CSS 变量查询接口
///
/// 声明解析器只依赖这个 trait，便于测试和解耦
pub trait VariableLookup {
    fn lookup(&self, name: &str) -> Option<&str>;
}

impl VariableLookup for HashMap<String, String> {
    fn lookup(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl VariableLookup for IndexMap<String, String> {
    fn lookup(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

/// CSS 自定义属性名 → Tailwind token 的字典
///
/// 每次修改后整体序列化并写回存储；写入失败只记录日志，不影响调用方。
#[derive(Debug)]
pub struct DictionaryStore<S: StorageBackend = MemoryStorage> {
    entries: IndexMap<String, String>,
    storage: S,
    key: String,
}

impl DictionaryStore<MemoryStorage> {
    /// 不落盘的空字典
    pub fn in_memory() -> Self {
        Self::load(MemoryStorage::new())
    }
}

impl<S: StorageBackend> DictionaryStore<S> {
    /// 从存储加载字典（使用默认 key）
    pub fn load(storage: S) -> Self {
        Self::load_with_key(storage, DICTIONARY_STORAGE_KEY)
    }

    /// 从存储的指定 key 加载字典
    ///
    /// 数据缺失或损坏时返回空字典，从不失败
    pub fn load_with_key(storage: S, key: impl Into<String>) -> Self {
        let mut store = Self {
            entries: IndexMap::new(),
            storage,
            key: key.into(),
        };
        store.reload();
        store
    }

    /// 重新从存储读取，丢弃内存中的内容
    pub fn reload(&mut self) {
        self.entries = match self.storage.read(&self.key) {
            Ok(Some(raw)) => parse_entries(&raw).unwrap_or_else(|err| {
                tracing::warn!("Ignoring malformed dictionary under '{}': {}", self.key, err);
                IndexMap::new()
            }),
            Ok(None) => {
                tracing::debug!("No dictionary under '{}', starting empty", self.key);
                IndexMap::new()
            }
            Err(err) => {
                tracing::warn!("Failed to read dictionary '{}': {}", self.key, err);
                IndexMap::new()
            }
        };
        tracing::info!("Loaded {} dictionary entries", self.entries.len());
    }

    /// 查询变量对应的 Tailwind 值
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name.trim()).map(String::as_str)
    }

    /// 新增或覆盖一条映射，返回旧值
    pub fn set(&mut self, name: &str, value: &str) -> Result<Option<String>, DictionaryError> {
        let (name, value) = validate_entry(name, value)?;
        let previous = self.entries.insert(name, value);
        self.persist();
        Ok(previous)
    }

    /// 删除一条映射，返回被删除的值
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let removed = self.entries.shift_remove(name.trim());
        if removed.is_some() {
            self.persist();
        }
        removed
    }

    /// 全部映射
    pub fn all(&self) -> &IndexMap<String, String> {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 序列化为持久化使用的 JSON 对象
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.entries).unwrap_or_else(|_| "{}".to_string())
    }

    /// 用 JSON 对象整体替换字典，返回导入的条目数
    ///
    /// 与加载不同，显式导入时的非法数据会报错，且不修改现有内容
    pub fn replace_all(&mut self, json: &str) -> Result<usize, DictionaryError> {
        let raw: IndexMap<String, String> = serde_json::from_str(json)
            .map_err(|e| DictionaryError::InvalidImport(e.to_string()))?;

        let mut entries = IndexMap::with_capacity(raw.len());
        for (name, value) in &raw {
            let (name, value) = validate_entry(name, value)?;
            entries.insert(name, value);
        }

        self.entries = entries;
        self.persist();
        Ok(self.entries.len())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    /// 整体写回存储，失败时只记录日志
    fn persist(&mut self) {
        let json = self.to_json();
        match self.storage.write(&self.key, &json) {
            Ok(()) => tracing::debug!("Persisted {} dictionary entries", self.entries.len()),
            Err(err) => tracing::warn!("Failed to persist dictionary '{}': {}", self.key, err),
        }
    }
}

impl<S: StorageBackend> VariableLookup for DictionaryStore<S> {
    fn lookup(&self, name: &str) -> Option<&str> {
        self.get(name)
    }
}

/// 解析持久化数据，丢弃空白条目
fn parse_entries(raw: &str) -> Result<IndexMap<String, String>, serde_json::Error> {
    let parsed: IndexMap<String, String> = serde_json::from_str(raw)?;
    Ok(parsed
        .into_iter()
        .filter_map(|(name, value)| validate_entry(&name, &value).ok())
        .collect())
}

fn validate_entry(name: &str, value: &str) -> Result<(String, String), DictionaryError> {
    let name = name.trim();
    let value = value.trim();
    if name.is_empty() {
        return Err(DictionaryError::EmptyName);
    }
    if value.is_empty() {
        return Err(DictionaryError::EmptyValue(name.to_string()));
    }
    Ok((name.to_string(), value.to_string()))
}
