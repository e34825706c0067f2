//! 初期化処理のエラー

use prism_toolchain::ToolchainError;
use std::path::PathBuf;
use thiserror::Error;

/// ホスト（デバッガ）操作のエラー
#[derive(Debug, Error)]
pub enum HostError {
    /// フォーマッタモジュールが見つからない
    #[error("module `{module}` not found in {}", dir.display())]
    ModuleNotFound { module: String, dir: PathBuf },

    /// 型名パターンが正規表現として不正
    #[error("invalid type name pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// 初期化を中断させるエラー
///
/// どれもホストへは伝播せず、ログに記録されて初期化が終了します。
#[derive(Debug, Error)]
pub enum InitError {
    /// ツールチェーンの探索に失敗した
    #[error(transparent)]
    Toolchain(#[from] ToolchainError),

    /// フォーマッタモジュールの読み込みに失敗した
    #[error("failed to import formatter module `{module}`: {source}")]
    Import {
        module: String,
        #[source]
        source: HostError,
    },

    /// サマリープロバイダの登録に失敗した
    #[error("failed to register summary provider: {0}")]
    Registration(#[source] HostError),

    /// 設定が不正
    #[error("invalid configuration: {0}")]
    Config(String),
}
