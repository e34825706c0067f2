//! ツールチェーン探索のエラー

use std::path::PathBuf;
use thiserror::Error;

/// ツールチェーン探索中に発生するエラー
#[derive(Debug, Error)]
pub enum ToolchainError {
    /// 検索パス上にコンパイラが見つからない
    #[error("compiler `{name}` not found on the search path")]
    CompilerNotFound { name: String },

    /// `rustc --print sysroot` の実行に失敗した
    #[error("failed to query sysroot from {}: {reason}", executable.display())]
    SysrootQuery { executable: PathBuf, reason: String },

    /// フォーマッタスクリプトのディレクトリが存在しない
    #[error("formatter directory {} does not exist", .0.display())]
    FormatterDirMissing(PathBuf),

    /// 検索パスにディレクトリを追加できない
    #[error("cannot add {} to the search path: {source}", dir.display())]
    SearchPath {
        dir: PathBuf,
        #[source]
        source: std::env::JoinPathsError,
    },
}
