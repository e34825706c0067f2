//! 検査対象の値の抽象
//!
//! デバッガが提示する値を、型名と子要素の列だけで表現します。

use crate::Result;
use serde::{Deserialize, Serialize};

/// 子要素への所有ハンドル
pub type ValueRef<'a> = Box<dyn InspectedValue + 'a>;

/// ホストが提供する値のトレイト
///
/// 実際の値表現（デバッガのSBValueなど）から独立しており、
/// テストでは合成した木で置き換えられます。
pub trait InspectedValue {
    /// 宣言された型名
    fn type_name(&self) -> Result<String>;

    /// 1段階分解した子要素（宣言順）
    fn children(&self) -> Result<Vec<ValueRef<'_>>>;

    /// ホストが表示用に持っている値のテキスト
    fn raw_value(&self) -> Option<String> {
        None
    }
}

impl<T: InspectedValue + ?Sized> InspectedValue for &T {
    fn type_name(&self) -> Result<String> {
        (**self).type_name()
    }

    fn children(&self) -> Result<Vec<ValueRef<'_>>> {
        (**self).children()
    }

    fn raw_value(&self) -> Option<String> {
        (**self).raw_value()
    }
}

/// メモリ上の値の木
///
/// JSONから読み込めます:
///
/// ```
/// use prism_summary::{InspectedValue, ValueNode};
///
/// let node: ValueNode = serde_json::from_str(
///     r#"{"type": "mycrate::Url", "children": [{"type": "alloc::string::String", "value": "a"}]}"#,
/// ).unwrap();
/// assert_eq!(node.type_name().unwrap(), "mycrate::Url");
/// assert_eq!(node.children().unwrap().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueNode {
    /// フィールド名
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// 型名
    #[serde(rename = "type")]
    pub type_name: String,
    /// 表示用の値
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// 子要素
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ValueNode>,
}

impl ValueNode {
    /// 子要素を持たないノードを作成する
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            name: None,
            type_name: type_name.into(),
            value: None,
            children: Vec::new(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_child(mut self, child: ValueNode) -> Self {
        self.children.push(child);
        self
    }
}

impl InspectedValue for ValueNode {
    fn type_name(&self) -> Result<String> {
        Ok(self.type_name.clone())
    }

    fn children(&self) -> Result<Vec<ValueRef<'_>>> {
        Ok(self
            .children
            .iter()
            .map(|child| Box::new(child) as ValueRef<'_>)
            .collect())
    }

    fn raw_value(&self) -> Option<String> {
        self.value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_children_keep_declaration_order() {
        let node = ValueNode::new("mycrate::Pair")
            .with_child(ValueNode::new("u8").named("a"))
            .with_child(ValueNode::new("u16").named("b"));

        let names: Vec<String> = node
            .children()
            .unwrap()
            .iter()
            .map(|child| child.type_name().unwrap())
            .collect();
        assert_eq!(names, vec!["u8", "u16"]);
    }

    #[test]
    fn test_deserialize_defaults() {
        let node: ValueNode = serde_json::from_str(r#"{"type": "u32", "value": "7"}"#).unwrap();
        assert_eq!(node, ValueNode::new("u32").with_value("7"));
        assert!(node.children().unwrap().is_empty());
    }
}
