use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::component::Params;

/// 约定的重复块参数名：其值为数组时按条目展开
pub const REPEAT_KEY: &str = "repeat";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentReference {
    pub component: String,
    #[serde(default)]
    pub params: Params,
}

impl ComponentReference {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            params: Params::new(),
        }
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn repeat<I>(self, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let items: Vec<Value> = items.into_iter().map(Into::into).collect();
        self.param(REPEAT_KEY, Value::Array(items))
    }

    pub fn repeat_items(&self) -> Option<&Vec<Value>> {
        self.params.get(REPEAT_KEY).and_then(Value::as_array)
    }
}

/// Ordered list of component references describing one page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageSpec {
    pub components: Vec<ComponentReference>,
}

impl PageSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, reference: ComponentReference) -> Self {
        self.components.push(reference);
        self
    }

    pub fn push(&mut self, reference: ComponentReference) {
        self.components.push(reference);
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ComponentReference> {
        self.components.iter()
    }
}

impl FromIterator<ComponentReference> for PageSpec {
    fn from_iter<I: IntoIterator<Item = ComponentReference>>(iter: I) -> Self {
        Self {
            components: iter.into_iter().collect(),
        }
    }
}
