//! URL/URI ラッパー型のヒューリスティックなサマリー
//!
//! 直下の子要素、次に孫要素までを宣言順に探し、最初に見つかったString型の
//! フィールドをツールチェーンのString表示に委譲します。孫要素より深くは辿りません。

use crate::provider::{StringSummary, SummaryProvider};
use crate::type_name::is_string_type;
use crate::value::{InspectedValue, ValueRef};
use crate::Result;
use std::rc::Rc;
use tracing::debug;

/// String型のフィールドが見つからなかった場合の表示
pub const UNKNOWN_URI: &str = "<unknown uri>";

/// URL/URI ラッパー型のサマリープロバイダ
pub struct UriSummarizer<S: ?Sized> {
    strings: Rc<S>,
}

impl<S: StringSummary + ?Sized> UriSummarizer<S> {
    /// String表示の委譲先を指定して作成する
    pub fn new(strings: Rc<S>) -> Self {
        Self { strings }
    }

    /// String型フィールドを探して表示する
    ///
    /// 見つからなければ `Ok(None)` を返します。
    pub fn resolve(&self, value: &dyn InspectedValue) -> Result<Option<String>> {
        let children = value.children()?;

        // 1段目: 直下の子要素
        if let Some(field) = find_string_field(&children)? {
            return self.strings.string_summary(&**field).map(Some);
        }

        // 2段目: 子要素ごとにその子要素を順に見る
        for child in &children {
            let grandchildren = child.children()?;
            if let Some(field) = find_string_field(&grandchildren)? {
                return self.strings.string_summary(&**field).map(Some);
            }
        }

        Ok(None)
    }
}

impl<S: StringSummary + ?Sized> SummaryProvider for UriSummarizer<S> {
    fn summarize(&self, value: &dyn InspectedValue) -> String {
        match self.resolve(value) {
            Ok(Some(summary)) => summary,
            Ok(None) => {
                debug!(target: "prism", "[uri] no string field found");
                UNKNOWN_URI.to_string()
            }
            Err(e) => {
                debug!(target: "prism", "[uri] inspection failed: {}", e);
                format!("<error: {}>", e)
            }
        }
    }
}

/// 宣言型名がStringを含む最初のフィールドを返す
fn find_string_field<'a, 'v>(fields: &'a [ValueRef<'v>]) -> Result<Option<&'a ValueRef<'v>>> {
    for field in fields {
        if is_string_type(&field.type_name()?) {
            return Ok(Some(field));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{StdStringSummary, ValueNode};

    /// 子要素を辿られると失敗するノード
    struct Untouchable;

    impl InspectedValue for Untouchable {
        fn type_name(&self) -> Result<String> {
            Ok("mycrate::Opaque".to_string())
        }

        fn children(&self) -> Result<Vec<ValueRef<'_>>> {
            anyhow::bail!("children of an opaque value were inspected")
        }
    }

    /// 任意の子要素を持てるノード
    struct Composite {
        type_name: &'static str,
        children: Vec<Box<dyn InspectedValue>>,
    }

    impl InspectedValue for Composite {
        fn type_name(&self) -> Result<String> {
            Ok(self.type_name.to_string())
        }

        fn children(&self) -> Result<Vec<ValueRef<'_>>> {
            Ok(self
                .children
                .iter()
                .map(|child| Box::new(&**child) as ValueRef<'_>)
                .collect())
        }
    }

    fn boxed<T: InspectedValue + 'static>(value: T) -> Box<dyn InspectedValue> {
        Box::new(value)
    }

    fn summarizer() -> UriSummarizer<StdStringSummary> {
        UriSummarizer::new(Rc::new(StdStringSummary))
    }

    fn string(value: &str) -> ValueNode {
        ValueNode::new("alloc::string::String").with_value(value)
    }

    #[test]
    fn test_newtype_around_string() {
        let uri = ValueNode::new("mycrate::wrapper::Uri").with_child(string("https://example.com"));
        assert_eq!(summarizer().summarize(&uri), "\"https://example.com\"");
    }

    #[test]
    fn test_first_direct_match_wins() {
        let url = ValueNode::new("mycrate::Url")
            .with_child(ValueNode::new("u16").named("port"))
            .with_child(string("first").named("serialization"))
            .with_child(string("second").named("fragment"));
        assert_eq!(summarizer().summarize(&url), "\"first\"");
    }

    #[test]
    fn test_direct_match_preferred_over_earlier_nested_match() {
        let url = ValueNode::new("mycrate::Url")
            .with_child(ValueNode::new("mycrate::Inner").with_child(string("nested")))
            .with_child(string("direct"));
        assert_eq!(summarizer().summarize(&url), "\"direct\"");
    }

    #[test]
    fn test_direct_match_does_not_inspect_grandchildren() {
        let url = Composite {
            type_name: "mycrate::Url",
            children: vec![boxed(string("direct")), boxed(Untouchable)],
        };
        assert_eq!(summarizer().summarize(&url), "\"direct\"");
    }

    #[test]
    fn test_nested_match_in_breadth_order() {
        let url = ValueNode::new("mycrate::Url")
            .with_child(
                ValueNode::new("mycrate::Scheme")
                    .with_child(ValueNode::new("u8"))
                    .with_child(string("from-child-0")),
            )
            .with_child(ValueNode::new("mycrate::Host").with_child(string("from-child-1")));
        assert_eq!(summarizer().summarize(&url), "\"from-child-0\"");
    }

    #[test]
    fn test_nested_match_stops_before_later_children() {
        let url = Composite {
            type_name: "mycrate::Url",
            children: vec![
                boxed(ValueNode::new("mycrate::Inner").with_child(string("nested"))),
                boxed(Untouchable),
            ],
        };
        assert_eq!(summarizer().summarize(&url), "\"nested\"");
    }

    #[test]
    fn test_no_string_field_returns_placeholder() {
        let url = ValueNode::new("mycrate::Url").with_child(
            ValueNode::new("mycrate::Parts")
                .with_child(ValueNode::new("u32"))
                .with_child(ValueNode::new("mycrate::Deep").with_child(string("too deep"))),
        );
        assert_eq!(summarizer().summarize(&url), UNKNOWN_URI);
    }

    #[test]
    fn test_value_without_children_returns_placeholder() {
        assert_eq!(summarizer().summarize(&ValueNode::new("mycrate::Uri")), UNKNOWN_URI);
    }

    #[test]
    fn test_traversal_error_is_reported_inline() {
        let url = Composite {
            type_name: "mycrate::Url",
            children: vec![boxed(ValueNode::new("u8")), boxed(Untouchable)],
        };
        assert_eq!(
            summarizer().summarize(&url),
            "<error: children of an opaque value were inspected>"
        );
    }

    #[test]
    fn test_delegate_error_is_reported_inline() {
        let uri =
            ValueNode::new("mycrate::Uri").with_child(ValueNode::new("alloc::string::String"));
        assert_eq!(
            summarizer().summarize(&uri),
            "<error: no string data for alloc::string::String>"
        );
    }

    #[test]
    fn test_resolve_reports_absence_explicitly() {
        let url = ValueNode::new("mycrate::Url").with_child(ValueNode::new("u64"));
        assert_eq!(summarizer().resolve(&url).unwrap(), None);
    }
}
