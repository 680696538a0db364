use std::path::PathBuf;

/// 検索の致命的エラー
///
/// 読めないファイルや壊れた `.gitignore` はここに含めない。
/// それらはスキップして検索を続行する。
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("'pattern' is required")]
    MissingArgument,

    #[error("path '{}' does not exist", .0.display())]
    PathNotFound(PathBuf),

    #[error("invalid regex: {0}")]
    InvalidPattern(String),
}

impl SearchError {
    /// ツール呼び出し側に返す文字列形式
    pub fn to_tool_output(&self) -> String {
        format!("Error: {}", self)
    }
}
