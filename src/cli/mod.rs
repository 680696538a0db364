//! コマンドラインインターフェース

pub mod cli_app;
pub mod search_runner;

pub use cli_app::{run_cli, Cli};
pub use search_runner::SearchRunner;
