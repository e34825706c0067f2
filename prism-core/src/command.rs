//! デバッガに発行するコマンド

use std::fmt;
use std::path::PathBuf;

/// デバッガ（LLDB）コマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    /// フォーマッタカテゴリを有効化
    EnableCategory(String),
    /// 文字列サマリーの最大表示長を設定
    SetMaxStringLength(usize),
    /// 型名パターンに合成子要素プロバイダを登録（置き換え）
    AddSynthetic {
        class: String,
        pattern: String,
        category: String,
    },
    /// 型名パターンにサマリー関数を登録（置き換え）
    AddSummary {
        function: String,
        pattern: String,
        category: String,
    },
    /// コマンドスクリプトを読み込んで実行
    SourceScript(PathBuf),
    /// スクリプトモジュールをインポート
    ImportScript(PathBuf),
}

impl fmt::Display for HostCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostCommand::EnableCategory(category) => {
                write!(f, "type category enable {}", category)
            }
            HostCommand::SetMaxStringLength(length) => {
                write!(f, "settings set target.max-string-summary-length {}", length)
            }
            HostCommand::AddSynthetic {
                class,
                pattern,
                category,
            } => write!(
                f,
                "type synthetic add -l {} -x \"{}\" --category {}",
                class, pattern, category
            ),
            HostCommand::AddSummary {
                function,
                pattern,
                category,
            } => write!(
                f,
                "type summary add -F {} -e -x -h \"{}\" --category {}",
                function, pattern, category
            ),
            HostCommand::SourceScript(path) => write!(f, "command source \"{}\"", path.display()),
            HostCommand::ImportScript(path) => {
                write!(f, "command script import \"{}\"", path.display())
            }
        }
    }
}
