//! LLDBコマンドスクリプトを生成するホスト
//!
//! 発行されたインポートとコマンドを順に記録し、`lldb -s` で読み込める
//! コマンドスクリプトとして書き出します。サマリープロバイダは
//! プロセス内の登録表に保持され、値の表示に使えます。

use crate::command::HostCommand;
use crate::errors::HostError;
use crate::host::{CommandInterface, FormatterModule, Host, SummaryRegistry};
use crate::Result;
use prism_summary::{InspectedValue, StdStringSummary, StringSummary, SummaryProvider};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::warn;

/// 読み込まれたツールチェーンのフォーマッタモジュール
#[derive(Debug, Clone)]
pub struct ToolchainModule {
    name: String,
    path: PathBuf,
}

impl ToolchainModule {
    /// モジュールファイルのパス
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StringSummary for ToolchainModule {
    fn string_summary(&self, value: &dyn InspectedValue) -> anyhow::Result<String> {
        StdStringSummary.string_summary(value)
    }
}

impl FormatterModule for ToolchainModule {
    fn name(&self) -> &str {
        &self.name
    }
}

/// コマンドスクリプトを生成するホスト
pub struct ScriptHost {
    /// スクリプトの行（発行順）
    lines: Vec<String>,
    /// コマンド実行インターフェースに発行されたコマンド
    commands: Vec<String>,
    /// インポートしたモジュールファイル
    imports: Vec<PathBuf>,
    /// サマリープロバイダ登録表
    registry: SummaryRegistry,
    /// コマンド実行インターフェースを提供するか
    accepts_commands: bool,
}

impl ScriptHost {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            commands: Vec::new(),
            imports: Vec::new(),
            registry: SummaryRegistry::new(),
            accepts_commands: true,
        }
    }

    /// コマンド実行インターフェースを持たないホストにする
    pub fn without_command_interface(mut self) -> Self {
        self.accepts_commands = false;
        self
    }

    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    pub fn imports(&self) -> &[PathBuf] {
        &self.imports
    }

    pub fn registry(&self) -> &SummaryRegistry {
        &self.registry
    }

    /// 登録済みのプロバイダで値を表示する
    pub fn summarize(&self, value: &dyn InspectedValue) -> Option<String> {
        self.registry.summarize(value)
    }

    /// コマンドスクリプトを文字列として生成する
    pub fn render(&self) -> String {
        let mut script = String::new();
        for line in &self.lines {
            script.push_str(line);
            script.push('\n');
        }
        script
    }

    /// コマンドスクリプトを書き出す
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        writer.write_all(self.render().as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// コマンドスクリプトをファイルに保存する
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.render())
            .map_err(|e| anyhow::anyhow!("Failed to write script {:?}: {}", path, e))
    }
}

impl Default for ScriptHost {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandInterface for ScriptHost {
    fn handle_command(&mut self, command: &str) {
        self.lines.push(command.to_string());
        self.commands.push(command.to_string());
    }
}

impl Host for ScriptHost {
    fn import_module(
        &mut self,
        dir: &Path,
        module: &str,
    ) -> std::result::Result<Rc<dyn FormatterModule>, HostError> {
        let path = dir.join(format!("{}.py", module));
        if !path.is_file() {
            return Err(HostError::ModuleNotFound {
                module: module.to_string(),
                dir: dir.to_path_buf(),
            });
        }

        self.lines.push(HostCommand::ImportScript(path.clone()).to_string());
        self.imports.push(path.clone());

        Ok(Rc::new(ToolchainModule {
            name: module.to_string(),
            path,
        }))
    }

    fn command_interface(&mut self) -> Option<&mut dyn CommandInterface> {
        if self.accepts_commands {
            Some(self)
        } else {
            None
        }
    }

    fn register_summary_provider(
        &mut self,
        pattern: &str,
        provider: Box<dyn SummaryProvider>,
    ) -> std::result::Result<(), HostError> {
        self.registry.upsert(pattern, provider)?;
        // スクリプトからはプロセス内のプロバイダを参照できない
        warn!(
            target: "prism",
            "[script] summary provider for {} is in-process only, not registered in LLDB",
            pattern
        );
        self.lines.push(format!(
            "# summary provider (in-process only, not registered in LLDB): {}",
            pattern
        ));
        Ok(())
    }
}
