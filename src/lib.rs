pub mod cli;
pub mod display;
pub mod error;
pub mod filters;
pub mod limits;
pub mod search;
pub mod searchers;
pub mod tool;
pub mod types;

// 公開API
pub use error::SearchError;
pub use limits::SearchLimits;
pub use search::{run, search, search_with_limits};
pub use tool::{all_tools, tool_by_name, SearchArgs, ToolDefinition};
pub use types::*;
