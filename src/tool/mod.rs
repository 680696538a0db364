//! ツール定義
//!
//! The search engine is exposed to an agent runtime as a callable tool with
//! usage text attached. `search` and `better_grep` share the same engine and
//! differ only in the usage prompt they carry.

mod prompts;

pub use prompts::{BETTER_GREP_USAGE, SEARCH_USAGE};

use crate::search::search;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolParameter {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<&'static str>,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub usage_prompt: &'static str,
    pub parameters: Vec<ToolParameter>,
}

/// ツール呼び出しの引数（JSON）
///
/// Absent and `null` fields fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchArgs {
    pub pattern: Option<String>,
    pub path: Option<String>,
    pub format: Option<String>,
    pub glob: Option<String>,
    pub ignore_case: Option<bool>,
}

impl SearchArgs {
    fn path(&self) -> &str {
        match self.path.as_deref() {
            Some(path) if !path.is_empty() => path,
            _ => ".",
        }
    }

    fn format(&self) -> &str {
        match self.format.as_deref() {
            Some(format) if !format.is_empty() => format,
            _ => "count",
        }
    }
}

impl ToolDefinition {
    fn new(name: &'static str, usage_prompt: &'static str) -> Self {
        Self {
            name,
            usage_prompt,
            parameters: search_parameters(),
        }
    }

    /// JSON引数でツールを実行
    pub fn call(&self, args: &Value) -> String {
        let args = match SearchArgs::deserialize(args) {
            Ok(args) => args,
            Err(e) => return format!("Error: invalid arguments: {}", e),
        };

        search(
            args.pattern.as_deref().unwrap_or_default(),
            args.path(),
            args.format(),
            args.glob.as_deref().unwrap_or_default(),
            args.ignore_case.unwrap_or_default(),
        )
    }
}

fn search_parameters() -> Vec<ToolParameter> {
    vec![
        ToolParameter {
            name: "pattern",
            kind: "string",
            required: true,
            default: None,
            description: "Regular expression to search for",
        },
        ToolParameter {
            name: "path",
            kind: "string",
            required: false,
            default: Some("."),
            description: "Directory or file root",
        },
        ToolParameter {
            name: "format",
            kind: "string",
            required: false,
            default: Some("count"),
            description: "count|lines|context|full",
        },
        ToolParameter {
            name: "glob",
            kind: "string",
            required: false,
            default: Some(""),
            description: "Comma-separated globs to narrow the search (supports **)",
        },
        ToolParameter {
            name: "ignore_case",
            kind: "boolean",
            required: false,
            default: Some("false"),
            description: "Case-insensitive matching",
        },
    ]
}

pub fn all_tools() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new("search", SEARCH_USAGE),
        ToolDefinition::new("better_grep", BETTER_GREP_USAGE),
    ]
}

pub fn tool_by_name(name: &str) -> Option<ToolDefinition> {
    all_tools().into_iter().find(|tool| tool.name == name)
}
