use super::SearchRunner;
use crate::tool::tool_by_name;
use crate::types::{OutputFormat, SearchRequest};
use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

/// codesift - structured code search with fixed output formats
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Regular expression to search for
    pub pattern: Option<String>,

    /// Directory or file to search (defaults to current directory)
    pub path: Option<String>,

    /// Output format: count | lines | context | full
    #[arg(short, long, default_value = "count")]
    pub format: String,

    /// Comma-separated globs to narrow the search (supports **)
    #[arg(short, long, default_value = "")]
    pub glob: String,

    /// Case-insensitive matching
    #[arg(short, long)]
    pub ignore_case: bool,

    /// Tool definition to use: search | better_grep
    #[arg(long, default_value = "search")]
    pub tool: String,

    /// Print the tool's usage prompt and exit
    #[arg(long)]
    pub usage: bool,

    /// Print the tool definition as JSON and exit
    #[arg(long)]
    pub describe: bool,

    /// Call the tool with a JSON argument object instead of positional arguments
    #[arg(long, value_name = "JSON")]
    pub args: Option<String>,
}

impl Cli {
    pub fn to_request(&self) -> SearchRequest {
        let path = match self.path.as_deref() {
            Some(path) if !path.is_empty() => path,
            _ => ".",
        };
        SearchRequest::new(self.pattern.clone().unwrap_or_default(), path)
            .with_format(OutputFormat::parse(&self.format))
            .with_globs(&self.glob)
            .with_ignore_case(self.ignore_case)
    }
}

/// CLI実行エントリーポイント（終了コードを返す）
pub fn run_cli() -> Result<i32> {
    let cli = Cli::parse();
    run_with(cli)
}

pub fn run_with(cli: Cli) -> Result<i32> {
    let tool = tool_by_name(&cli.tool)
        .with_context(|| format!("Unknown tool '{}' (expected search or better_grep)", cli.tool))?;
    let runner = SearchRunner::new(tool);

    if cli.usage {
        return runner.emit(runner.tool().usage_prompt.trim_end());
    }

    if cli.describe {
        let json = serde_json::to_string_pretty(runner.tool())
            .context("Failed to serialize tool definition")?;
        return runner.emit(&json);
    }

    if let Some(raw_args) = &cli.args {
        let output = runner.execute_json(raw_args)?;
        return runner.emit(&output);
    }

    let request = cli.to_request();
    debug!("Request: {:?}", request);
    let output = runner.execute(&request);
    runner.emit(&output)
}
