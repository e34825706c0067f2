//! Prism サマリープロバイダ
//!
//! このクレートは、デバッガ上の値を型名と子要素の構造から検査する抽象と、
//! URL/URI ラッパー型のためのヒューリスティックなサマリープロバイダを提供します。
//! 値の実体はホスト（デバッガ）が所有し、ここでは読み取り専用で辿るだけです。

pub mod provider;
pub mod type_name;
pub mod uri;
pub mod value;

pub use provider::{StdStringSummary, StringSummary, SummaryProvider};
pub use type_name::{is_string_type, UriTypeMatcher, DEFAULT_URI_IDENTIFIERS, STRING_TYPE_MARKER};
pub use uri::{UriSummarizer, UNKNOWN_URI};
pub use value::{InspectedValue, ValueNode, ValueRef};

/// サマリー処理の結果型
pub type Result<T> = anyhow::Result<T>;
