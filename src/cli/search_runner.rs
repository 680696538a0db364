use crate::limits::SearchLimits;
use crate::search::run;
use crate::tool::ToolDefinition;
use crate::types::SearchRequest;
use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;

/// 検索実行エンジン
///
/// CLI引数またはJSON引数からツールを実行し、結果を標準出力に書き出す。
#[derive(Debug, Clone)]
pub struct SearchRunner {
    tool: ToolDefinition,
    limits: SearchLimits,
}

impl SearchRunner {
    pub fn new(tool: ToolDefinition) -> Self {
        Self {
            tool,
            limits: SearchLimits::default(),
        }
    }

    pub fn tool(&self) -> &ToolDefinition {
        &self.tool
    }

    /// Broken pipeを安全にハンドリングして出力
    fn safe_println(text: &str) -> Result<()> {
        match writeln!(std::io::stdout(), "{}", text) {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
                // Broken pipeは正常な終了として扱う
                std::process::exit(0);
            }
            Err(e) => Err(anyhow::anyhow!("Output error: {}", e)),
        }
    }

    /// リクエストを実行して文字列結果を返す
    pub fn execute(&self, request: &SearchRequest) -> String {
        let start_time = std::time::Instant::now();
        let output = match run(request, &self.limits) {
            Ok(output) => output,
            Err(err) => err.to_tool_output(),
        };
        info!(
            "{} finished in {:.2}ms",
            self.tool.name,
            start_time.elapsed().as_secs_f64() * 1000.0
        );
        output
    }

    /// JSON引数（エージェントからの呼び出し形式）で実行
    pub fn execute_json(&self, raw_args: &str) -> Result<String> {
        let args: serde_json::Value =
            serde_json::from_str(raw_args).context("Failed to parse tool arguments as JSON")?;
        debug!("Calling {} with {}", self.tool.name, args);
        Ok(self.tool.call(&args))
    }

    /// 結果を出力して終了コードを返す（エラー文字列なら1）
    pub fn emit(&self, output: &str) -> Result<i32> {
        Self::safe_println(output)?;
        Ok(exit_code_for(output))
    }
}

pub fn exit_code_for(output: &str) -> i32 {
    if output.starts_with("Error: ") {
        1
    } else {
        0
    }
}
