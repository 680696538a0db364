//! 候補ファイルのフィルタ群
//!
//! - ディレクトリ除外（固定リスト）
//! - ルートの .gitignore
//! - glob による絞り込み
//! - バイナリ判定

pub mod file_filter;
pub mod gitignore_filter;
pub mod skip_dirs;

pub use file_filter::FileFilter;
pub use gitignore_filter::GitignoreFilter;
pub use skip_dirs::{is_skipped_dir, DEFAULT_SKIP_DIRS};
