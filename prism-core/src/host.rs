//! ホスト（デバッガ）の抽象
//!
//! フォーマッタ登録表はホストが所有するグローバル状態です。
//! 初期化処理はこのトレイト越しに登録（置き換え）操作を発行するだけで、
//! 登録内容を読み戻すことはありません。

use crate::errors::HostError;
use prism_summary::{InspectedValue, StringSummary, SummaryProvider};
use regex::Regex;
use std::path::Path;
use std::rc::Rc;
use tracing::debug;

/// デバッガのコマンド実行インターフェース
pub trait CommandInterface {
    /// コマンド文字列を発行する（結果は待たない）
    fn handle_command(&mut self, command: &str);
}

/// ツールチェーン同梱のフォーマッタモジュール
pub trait FormatterModule: StringSummary {
    fn name(&self) -> &str;
}

/// デバッガのトレイト
pub trait Host {
    /// ディレクトリをインポート可能にしてモジュールを読み込む
    fn import_module(
        &mut self,
        dir: &Path,
        module: &str,
    ) -> Result<Rc<dyn FormatterModule>, HostError>;

    /// コマンド実行インターフェース（提供されない場合はNone）
    fn command_interface(&mut self) -> Option<&mut dyn CommandInterface>;

    /// 型名パターンにサマリープロバイダを登録する（同じパターンは置き換え）
    fn register_summary_provider(
        &mut self,
        pattern: &str,
        provider: Box<dyn SummaryProvider>,
    ) -> Result<(), HostError>;
}

/// 型名パターンごとのサマリープロバイダ登録表
#[derive(Default)]
pub struct SummaryRegistry {
    entries: Vec<(Regex, Box<dyn SummaryProvider>)>,
}

impl SummaryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// プロバイダを登録する
    ///
    /// 同じパターンがすでに登録されていれば置き換えます。
    pub fn upsert(
        &mut self,
        pattern: &str,
        provider: Box<dyn SummaryProvider>,
    ) -> Result<(), HostError> {
        if let Some(entry) = self.entries.iter_mut().find(|(regex, _)| regex.as_str() == pattern) {
            debug!(target: "prism", "[registry] replacing provider for {}", pattern);
            entry.1 = provider;
            return Ok(());
        }

        let regex = Regex::new(pattern)?;
        self.entries.push((regex, provider));
        Ok(())
    }

    /// 登録済みのパターン（登録順）
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(regex, _)| regex.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 型名が最初に一致したプロバイダで値を表示する
    ///
    /// 一致するプロバイダがない場合や型名を取得できない場合はNoneです。
    pub fn summarize(&self, value: &dyn InspectedValue) -> Option<String> {
        let type_name = value.type_name().ok()?;

        self.entries
            .iter()
            .find(|(regex, _)| regex.is_match(&type_name))
            .map(|(_, provider)| provider.summarize(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_summary::ValueNode;

    struct Fixed(&'static str);

    impl SummaryProvider for Fixed {
        fn summarize(&self, _value: &dyn InspectedValue) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn test_upsert_replaces_same_pattern() {
        let mut registry = SummaryRegistry::new();
        registry.upsert("^(.*::)?Url$", Box::new(Fixed("old"))).unwrap();
        registry.upsert("^(.*::)?Url$", Box::new(Fixed("new"))).unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.summarize(&ValueNode::new("url::Url")),
            Some("new".to_string())
        );
    }

    #[test]
    fn test_dispatch_by_type_name() {
        let mut registry = SummaryRegistry::new();
        registry.upsert("^(.*::)?Url$", Box::new(Fixed("url"))).unwrap();
        registry.upsert("^(.*::)?Uri$", Box::new(Fixed("uri"))).unwrap();

        assert_eq!(registry.summarize(&ValueNode::new("http::Uri")).as_deref(), Some("uri"));
        assert_eq!(registry.summarize(&ValueNode::new("mycrate::Path")), None);
        assert_eq!(registry.patterns().collect::<Vec<_>>(), vec!["^(.*::)?Url$", "^(.*::)?Uri$"]);
    }

    #[test]
    fn test_invalid_pattern() {
        let mut registry = SummaryRegistry::new();
        let err = registry.upsert("(unclosed", Box::new(Fixed("x"))).unwrap_err();
        assert!(matches!(err, HostError::InvalidPattern(_)));
        assert!(registry.is_empty());
    }
}
