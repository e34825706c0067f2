//! サマリープロバイダのトレイト

use crate::value::InspectedValue;
use crate::Result;

/// 値を1行の表示文字列に変換するプロバイダ
///
/// ホストは値を表示するたびに呼び出します。失敗しても例外を返さず、
/// 何らかの文字列を返さなければなりません。
pub trait SummaryProvider {
    fn summarize(&self, value: &dyn InspectedValue) -> String;
}

/// String型の値を表示するための委譲先
///
/// 通常はツールチェーン同梱のフォーマッタが実装します。
pub trait StringSummary {
    fn string_summary(&self, value: &dyn InspectedValue) -> Result<String>;
}

/// ホストが値のテキストを保持している場合のString表示
///
/// テキストをRustの文字列リテラルとして引用符付きで表示します。
#[derive(Debug, Default, Clone, Copy)]
pub struct StdStringSummary;

impl StringSummary for StdStringSummary {
    fn string_summary(&self, value: &dyn InspectedValue) -> Result<String> {
        let text = value.raw_value().ok_or_else(|| {
            anyhow::anyhow!("no string data for {}", value.type_name().unwrap_or_default())
        })?;
        Ok(format!("{:?}", text))
    }
}
