//! 検索エンジンモジュール
//!
//! - 候補ファイルの収集（ディレクトリ走査・フィルタ）
//! - 正規表現による行単位の検索

pub mod content_search;
pub mod file_gatherer;

// Re-export for easier access
pub use content_search::{compile_pattern, ContentSearcher};
pub use file_gatherer::{resolve_root, FileGatherer, ResolvedRoot};
