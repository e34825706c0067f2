//! 型名の判定

use crate::Result;
use regex::Regex;

/// 基本的な可変長文字列型の完全修飾名
pub const STRING_TYPE_MARKER: &str = "alloc::string::String";

/// URL/URI ラッパー型とみなす型名の末尾識別子（大文字小文字を区別）
pub const DEFAULT_URI_IDENTIFIERS: [&str; 4] = ["Url", "Uri", "URL", "URI"];

/// 宣言型名がStringを含むか判定する
///
/// 部分一致なので `&alloc::string::String` なども対象になります。
pub fn is_string_type(type_name: &str) -> bool {
    type_name.contains(STRING_TYPE_MARKER)
}

/// URL/URI ラッパー型の検出器
#[derive(Debug, Clone)]
pub struct UriTypeMatcher {
    pattern: Regex,
}

impl UriTypeMatcher {
    /// 識別子の集合から検出器を作成する
    pub fn new<S: AsRef<str>>(identifiers: &[S]) -> Result<Self> {
        if identifiers.is_empty() {
            anyhow::bail!("at least one URI type identifier is required");
        }

        let pattern = Regex::new(&Self::pattern_for(identifiers))?;
        Ok(Self { pattern })
    }

    /// 最後のパス要素が識別子のいずれかに一致する型名の正規表現を生成する
    ///
    /// 例: `["Url", "Uri"]` -> `^(.*::)?(Url|Uri)$`
    pub fn pattern_for<S: AsRef<str>>(identifiers: &[S]) -> String {
        let alternatives: Vec<String> = identifiers
            .iter()
            .map(|id| regex::escape(id.as_ref()))
            .collect();
        format!("^(.*::)?({})$", alternatives.join("|"))
    }

    /// ホストに登録する正規表現
    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn is_match(&self, type_name: &str) -> bool {
        self.pattern.is_match(type_name)
    }
}

impl Default for UriTypeMatcher {
    fn default() -> Self {
        Self::new(&DEFAULT_URI_IDENTIFIERS).expect("default URI identifiers form a valid pattern")
    }
}
