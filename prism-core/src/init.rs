//! 初期化シーケンス
//!
//! ツールチェーン探索 → フォーマッタディレクトリ解決 → モジュール読み込み →
//! 表示設定の調整 → URL/URI サマリープロバイダ登録 の順に一度だけ実行します。
//! どの段階の失敗もホストには伝播せず、ログに記録して初期化を終了します。
//! 再実行しても登録は置き換えられるだけです。

use crate::config::InitConfig;
use crate::errors::InitError;
use crate::host::Host;
use crate::{loader, tuner};
use prism_summary::{UriSummarizer, UriTypeMatcher};
use prism_toolchain::{FormatterDirectory, ToolchainInfo, ToolchainProbe};
use tracing::{info, warn};

/// 初期化が完了した場合の報告
#[derive(Debug, Clone)]
pub struct InitReport {
    /// 使用したツールチェーン
    pub toolchain: ToolchainInfo,
    /// フォーマッタスクリプトのディレクトリ
    pub formatter_dir: FormatterDirectory,
    /// 読み込んだモジュール名
    pub module: String,
    /// 調整のために発行したコマンド数
    pub tuning_commands: usize,
    /// URL/URI サマリープロバイダの型名パターン
    pub uri_pattern: String,
}

/// 初期化の結果
#[derive(Debug)]
pub enum InitOutcome {
    /// フォーマッタが読み込まれた
    Loaded(InitReport),
    /// 初期化が中断された（フォーマッタは使用できない）
    Aborted(InitError),
}

impl InitOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, InitOutcome::Loaded(_))
    }

    pub fn report(&self) -> Option<&InitReport> {
        match self {
            InitOutcome::Loaded(report) => Some(report),
            InitOutcome::Aborted(_) => None,
        }
    }

    pub fn error(&self) -> Option<&InitError> {
        match self {
            InitOutcome::Loaded(_) => None,
            InitOutcome::Aborted(e) => Some(e),
        }
    }
}

/// 初期化処理
pub struct Initializer {
    config: InitConfig,
}

impl Initializer {
    pub fn new(config: InitConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &InitConfig {
        &self.config
    }

    /// 初期化シーケンスを実行する
    ///
    /// 失敗してもパニックせず、`InitOutcome::Aborted` を返します。
    pub fn run(&self, probe: &dyn ToolchainProbe, host: &mut dyn Host) -> InitOutcome {
        match self.try_run(probe, host) {
            Ok(report) => {
                info!(
                    target: "prism",
                    "[init] pretty-printers loaded from {}",
                    report.formatter_dir.path().display()
                );
                InitOutcome::Loaded(report)
            }
            Err(e) => {
                warn!(target: "prism", "[init] pretty-printers unavailable: {}", e);
                InitOutcome::Aborted(e)
            }
        }
    }

    fn try_run(
        &self,
        probe: &dyn ToolchainProbe,
        host: &mut dyn Host,
    ) -> Result<InitReport, InitError> {
        // ホストに触れる前に設定を検証する
        let matcher = UriTypeMatcher::new(&self.config.uri_identifiers)
            .map_err(|e| InitError::Config(e.to_string()))?;

        let toolchain = probe.locate()?;
        let formatter_dir = FormatterDirectory::for_toolchain(&toolchain)?;

        let module = loader::load_formatters(host, &formatter_dir, &self.config)?;
        let tuning_commands = tuner::apply(host, &self.config);

        let module_name = module.name().to_string();
        host.register_summary_provider(matcher.as_str(), Box::new(UriSummarizer::new(module)))
            .map_err(InitError::Registration)?;
        info!(
            target: "prism",
            "[init] URI summary provider handed to host for {}",
            matcher.as_str()
        );

        Ok(InitReport {
            toolchain,
            formatter_dir,
            module: module_name,
            tuning_commands,
            uri_pattern: matcher.as_str().to_string(),
        })
    }
}

impl Default for Initializer {
    fn default() -> Self {
        Self::new(InitConfig::default())
    }
}
