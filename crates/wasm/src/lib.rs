use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crosswind_core::{
    Diagnostic, DiagnosticLevel, DictionaryStore, MemoryStorage, StorageBackend, StorageError,
};
use crosswind_transform::{transform_css as rs_transform_css, TransformOptions, TransformResult};

// ── 浏览器 localStorage 绑定 ──────────────────────────────────

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = localStorage, js_name = getItem, catch)]
    fn local_storage_get(key: &str) -> Result<Option<String>, JsValue>;

    #[wasm_bindgen(js_namespace = localStorage, js_name = setItem, catch)]
    fn local_storage_set(key: &str, value: &str) -> Result<(), JsValue>;
}

/// 字典的存储后端
///
/// 浏览器中使用 localStorage；测试或禁用存储的环境使用内存
pub enum BrowserStorage {
    Local,
    Memory(MemoryStorage),
}

impl StorageBackend for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            BrowserStorage::Local => local_storage_get(key).map_err(storage_error),
            BrowserStorage::Memory(storage) => storage.read(key),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            BrowserStorage::Local => local_storage_set(key, value).map_err(storage_error),
            BrowserStorage::Memory(storage) => storage.write(key, value),
        }
    }
}

fn storage_error(err: JsValue) -> StorageError {
    StorageError::Unavailable(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

// ── JS 侧 serde 镜像类型 ──────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct JsConvertOptions {
    #[serde(default)]
    prefixes: String,
    #[serde(default)]
    existing_classes: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsDiagnostic {
    level: &'static str,
    message: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsConvertResult {
    classes: String,
    generated: Vec<String>,
    diagnostics: Vec<JsDiagnostic>,
}

// ── 类型转换 ──────────────────────────────────────────────────

impl From<JsConvertOptions> for TransformOptions {
    fn from(opts: JsConvertOptions) -> Self {
        TransformOptions::new()
            .with_prefixes(opts.prefixes)
            .with_existing_classes(opts.existing_classes)
    }
}

impl From<Diagnostic> for JsDiagnostic {
    fn from(d: Diagnostic) -> Self {
        JsDiagnostic {
            level: match d.level {
                DiagnosticLevel::Info => "info",
                DiagnosticLevel::Warning => "warning",
            },
            message: d.message,
        }
    }
}

impl From<TransformResult> for JsConvertResult {
    fn from(result: TransformResult) -> Self {
        JsConvertResult {
            classes: result.classes,
            generated: result.generated,
            diagnostics: result.diagnostics.into_iter().map(Into::into).collect(),
        }
    }
}

fn parse_options(options: JsValue) -> Result<JsConvertOptions, JsError> {
    if options.is_undefined() || options.is_null() {
        Ok(JsConvertOptions::default())
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))
    }
}

fn parse_dictionary(dictionary: JsValue) -> Result<IndexMap<String, String>, JsError> {
    if dictionary.is_undefined() || dictionary.is_null() {
        Ok(IndexMap::new())
    } else {
        serde_wasm_bindgen::from_value(dictionary)
            .map_err(|e| JsError::new(&format!("Invalid dictionary: {}", e)))
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    value
        .serialize(&serializer)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

// ── WASM 导出 ─────────────────────────────────────────────────

/// 初始化 panic hook（自动调用）
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// 无状态转换
///
/// @param css        - 设计工具导出的 CSS 声明
/// @param dictionary - `{ "--var": "token" }`，可选
/// @param options    - `{ prefixes, existingClasses }`，可选
/// @returns `{ classes, generated, diagnostics }`
#[wasm_bindgen(js_name = "transformCss")]
pub fn transform_css(css: &str, dictionary: JsValue, options: JsValue) -> Result<JsValue, JsError> {
    let dictionary = parse_dictionary(dictionary)?;
    let opts: TransformOptions = parse_options(options)?.into();
    let result = rs_transform_css(css, &dictionary, &opts);
    to_js(&JsConvertResult::from(result))
}

/// 带持久化字典的转换器
#[wasm_bindgen]
pub struct Converter {
    store: DictionaryStore<BrowserStorage>,
}

#[wasm_bindgen]
impl Converter {
    /// 从 localStorage 加载字典
    #[wasm_bindgen(constructor)]
    pub fn new() -> Converter {
        Converter {
            store: DictionaryStore::load(BrowserStorage::Local),
        }
    }

    /// 不持久化的转换器
    #[wasm_bindgen(js_name = "inMemory")]
    pub fn in_memory() -> Converter {
        Converter {
            store: DictionaryStore::load(BrowserStorage::Memory(MemoryStorage::new())),
        }
    }

    /// 转换 CSS 声明
    ///
    /// @param options - `{ prefixes, existingClasses }`，可选
    /// @returns `{ classes, generated, diagnostics }`
    pub fn convert(&self, css: &str, options: JsValue) -> Result<JsValue, JsError> {
        let opts: TransformOptions = parse_options(options)?.into();
        let result = rs_transform_css(css, &self.store, &opts);
        to_js(&JsConvertResult::from(result))
    }

    /// 新增或覆盖一条映射，返回旧值
    #[wasm_bindgen(js_name = "setVariable")]
    pub fn set_variable(&mut self, name: &str, value: &str) -> Result<Option<String>, JsError> {
        self.store
            .set(name, value)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// 删除一条映射，返回被删除的值
    #[wasm_bindgen(js_name = "removeVariable")]
    pub fn remove_variable(&mut self, name: &str) -> Option<String> {
        self.store.remove(name)
    }

    /// 查询一条映射
    #[wasm_bindgen(js_name = "getVariable")]
    pub fn get_variable(&self, name: &str) -> Option<String> {
        self.store.get(name).map(str::to_string)
    }

    /// 全部映射，`{ "--var": "token" }`
    pub fn variables(&self) -> Result<JsValue, JsError> {
        to_js(self.store.all())
    }

    /// 导出为 JSON 字符串（与持久化格式一致）
    #[wasm_bindgen(js_name = "exportDictionary")]
    pub fn export_dictionary(&self) -> String {
        self.store.to_json()
    }

    /// 用 JSON 对象整体替换字典，返回条目数
    #[wasm_bindgen(js_name = "importDictionary")]
    pub fn import_dictionary(&mut self, json: &str) -> Result<usize, JsError> {
        self.store
            .replace_all(json)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// 重新从存储读取字典
    pub fn reload(&mut self) {
        self.store.reload();
    }

    #[wasm_bindgen(getter)]
    pub fn size(&self) -> usize {
        self.store.len()
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_mirror_defaults() {
        let opts: JsConvertOptions = serde_json::from_str("{}").unwrap();
        let opts: TransformOptions = opts.into();
        assert_eq!(opts, TransformOptions::default());
    }

    #[test]
    fn test_options_mirror_camel_case() {
        let opts: JsConvertOptions =
            serde_json::from_str(r#"{"prefixes":"lg","existingClasses":"flex"}"#).unwrap();
        let opts: TransformOptions = opts.into();
        assert_eq!(opts.prefixes, "lg");
        assert_eq!(opts.existing_classes, "flex");
    }

    #[test]
    fn test_result_mirror() {
        let result = TransformResult {
            classes: "text-base".to_string(),
            generated: vec!["text-base".to_string()],
            diagnostics: vec![Diagnostic::info("Skipped line: x")],
        };
        let js = JsConvertResult::from(result);
        let json = serde_json::to_value(&js).unwrap();
        assert_eq!(json["classes"], "text-base");
        assert_eq!(json["diagnostics"][0]["level"], "info");
    }

    #[test]
    fn test_memory_converter_dictionary() {
        let mut converter = Converter::in_memory();
        assert_eq!(converter.set_variable("--Brand", "brand").ok(), Some(None));
        assert_eq!(converter.get_variable("--Brand").as_deref(), Some("brand"));
        assert_eq!(converter.size(), 1);
        assert_eq!(converter.export_dictionary(), r#"{"--Brand":"brand"}"#);
        assert_eq!(
            converter.remove_variable("--Brand").as_deref(),
            Some("brand")
        );
        assert_eq!(converter.size(), 0);
    }
}
