use std::collections::HashMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// 存储错误
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// 文件读写失败
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 宿主存储不可用（如浏览器禁用了 localStorage）
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// 扁平 key-value 持久化接口
///
/// 字典只通过这个接口读写，便于替换成文件、内存或浏览器存储
pub trait StorageBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// 内存存储
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// 预置一条原始数据（builder 模式）
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// 读取原始字符串
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// 文件存储：每个 key 对应目录下的一个 `<key>.json`
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// key 对应的文件路径，非法文件名字符替换为 `_`
    pub fn path_for(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{}.json", file_name))
    }
}

impl StorageBackend for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&path)
            .map(Some)
            .map_err(|source| StorageError::Io { path, source })
    }

    /// 原子写入：先写临时文件再 rename
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);

        fs::create_dir_all(&self.dir).map_err(io_err(&self.dir))?;

        let temp_path = path.with_extension("tmp");
        {
            let mut file = File::create(&temp_path).map_err(io_err(&temp_path))?;
            file.write_all(value.as_bytes()).map_err(io_err(&temp_path))?;
            file.sync_all().map_err(io_err(&temp_path))?;
        }

        fs::rename(&temp_path, &path).map_err(|source| {
            let _ = fs::remove_file(&temp_path);
            StorageError::Io { path, source }
        })
    }
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> StorageError {
    let path = path.to_path_buf();
    move |source| StorageError::Io { path, source }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_round_trip() {
        let mut storage = MemoryStorage::new();
        assert!(storage.read("k").unwrap().is_none());
        storage.write("k", "{}").unwrap();
        assert_eq!(storage.read("k").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn test_file_storage_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path().join("nested"));

        storage.write("crosswind.variables", "{\"--a\":\"b\"}").unwrap();

        let path = storage.path_for("crosswind.variables");
        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
        assert_eq!(
            storage.read("crosswind.variables").unwrap().as_deref(),
            Some("{\"--a\":\"b\"}")
        );
    }

    #[test]
    fn test_file_storage_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        assert!(storage.read("absent").unwrap().is_none());
    }

    #[test]
    fn test_path_for_sanitizes_key() {
        let storage = FileStorage::new("/tmp/x");
        assert_eq!(
            storage.path_for("a/b:c"),
            PathBuf::from("/tmp/x/a_b_c.json")
        );
    }
}
