//! Prism ツールチェーン探索
//!
//! このクレートは、Rustコンパイラの実行ファイルとsysrootを探索し、
//! ツールチェーンに同梱されたデバッガ用フォーマッタスクリプトのディレクトリを解決します。
//! 環境が欠けている場合や壊れている場合でも、パニックせずにエラー値で報告します。

pub mod errors;
pub mod formatter_dir;
pub mod locator;
pub mod search_path;

pub use errors::ToolchainError;
pub use formatter_dir::FormatterDirectory;
pub use locator::{find_compiler, query_sysroot, ToolchainInfo, ToolchainLocator, ToolchainProbe};
pub use search_path::{ensure_on_search_path, prepend_unique, toolchain_bin_dir};

/// ツールチェーン探索の結果型
pub type Result<T> = std::result::Result<T, ToolchainError>;
