//! 初期化設定

use prism_summary::DEFAULT_URI_IDENTIFIERS;
use prism_toolchain::locator::DEFAULT_COMPILER;
use prism_toolchain::ToolchainLocator;

/// 有効化するフォーマッタカテゴリ
pub const DEFAULT_CATEGORY: &str = "Rust";

/// 文字列サマリーの最大表示長
pub const DEFAULT_MAX_STRING_LENGTH: usize = 10_000;

/// ツールチェーン同梱のフォーマッタモジュール名
pub const DEFAULT_MODULE: &str = "lldb_lookup";

/// フォーマッタディレクトリ内の補助コマンドスクリプト名
pub const DEFAULT_COMMAND_SCRIPT: &str = "lldb_commands";

/// 任意のモジュールパスで修飾された `alloc::...::Vec<T>` に一致する型名パターン
pub const VEC_TYPE_PATTERN: &str = r"^(alloc::([a-z_]+::)+)Vec<.+>$";

/// 初期化設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitConfig {
    /// コンパイラ名またはパス
    pub compiler: String,
    /// フォーマッタカテゴリ名
    pub category: String,
    /// 文字列サマリーの最大表示長
    pub max_string_length: usize,
    /// フォーマッタモジュール名
    pub module: String,
    /// 補助コマンドスクリプト名
    pub command_script: String,
    /// URL/URI 型とみなす型名の末尾識別子
    pub uri_identifiers: Vec<String>,
}

impl InitConfig {
    /// 設定されたコンパイラを探す探索器
    pub fn locator(&self) -> ToolchainLocator {
        ToolchainLocator::new(self.compiler.clone())
    }

    /// Vec用の合成子要素プロバイダ
    pub fn synthetic_provider(&self) -> String {
        format!("{}.synthetic_lookup", self.module)
    }

    /// Vec用のサマリー関数
    pub fn summary_provider(&self) -> String {
        format!("{}.summary_lookup", self.module)
    }
}

impl Default for InitConfig {
    fn default() -> Self {
        Self {
            compiler: DEFAULT_COMPILER.to_string(),
            category: DEFAULT_CATEGORY.to_string(),
            max_string_length: DEFAULT_MAX_STRING_LENGTH,
            module: DEFAULT_MODULE.to_string(),
            command_script: DEFAULT_COMMAND_SCRIPT.to_string(),
            uri_identifiers: DEFAULT_URI_IDENTIFIERS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
