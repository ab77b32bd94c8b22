pub mod declaration;
pub mod dictionary;
pub mod merge;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use declaration::{parse_declarations, resolve_value, ParsedBlock};
pub use dictionary::{DictionaryError, DictionaryStore, VariableLookup, DICTIONARY_STORAGE_KEY};
pub use merge::{merge_declarations, DeclarationSet};
pub use storage::{FileStorage, MemoryStorage, StorageBackend, StorageError};
pub use types::{Declaration, Diagnostic, DiagnosticLevel, ResolvedValue, ValuePart};
