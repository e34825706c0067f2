//! Prism の初期化処理
//!
//! このクレートは、ツールチェーン同梱のフォーマッタをデバッガに読み込み、
//! カテゴリや表示設定を調整し、URL/URI 型のサマリープロバイダを登録する
//! 一度きりの初期化シーケンスを提供します。
//! デバッガ（ホスト）は `Host` トレイトとして注入されます。

pub mod command;
pub mod config;
pub mod errors;
pub mod host;
pub mod init;
pub mod loader;
pub mod script_host;
pub mod tuner;

pub use command::HostCommand;
pub use config::InitConfig;
pub use errors::{HostError, InitError};
pub use host::{CommandInterface, FormatterModule, Host, SummaryRegistry};
pub use init::{InitOutcome, InitReport, Initializer};
pub use script_host::{ScriptHost, ToolchainModule};

// 他のクレートから使用するために再エクスポート
pub use prism_summary::{InspectedValue, SummaryProvider, ValueNode};
pub use prism_toolchain::{FormatterDirectory, ToolchainInfo, ToolchainLocator, ToolchainProbe};

/// 初期化処理の結果型
pub type Result<T> = anyhow::Result<T>;
