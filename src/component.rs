use std::{fmt, sync::Arc};

use serde_json::{Map, Value};

/// 组件参数：顶层键到 JSON 值的映射，合并时只覆盖顶层键
pub type Params = Map<String, Value>;

/// 渲染函数由外部渲染层提供，对组合引擎不透明
pub type RenderFn = Arc<dyn Fn(&Params) -> String + Send + Sync>;

/// A named, parameterized view component.
///
/// Identity is the name: two definitions with the same name compare equal
/// regardless of their render functions.
#[derive(Clone)]
pub struct ComponentDefinition {
    name: String,
    default_params: Params,
    render: RenderFn,
}

impl ComponentDefinition {
    pub fn new<F>(name: impl Into<String>, render: F) -> Self
    where
        F: Fn(&Params) -> String + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            default_params: Params::new(),
            render: Arc::new(render),
        }
    }

    /// 无渲染函数的组件（渲染结果为空串），用于纯组合场景
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, |_| String::new())
    }

    pub fn with_default(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.default_params.insert(key.into(), value.into());
        self
    }

    pub fn with_defaults(mut self, defaults: Params) -> Self {
        self.default_params = defaults;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn default_params(&self) -> &Params {
        &self.default_params
    }

    pub fn render(&self, params: &Params) -> String {
        (self.render)(params)
    }
}

impl PartialEq for ComponentDefinition {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}
impl Eq for ComponentDefinition {}

impl fmt::Debug for ComponentDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentDefinition")
            .field("name", &self.name)
            .field("default_params", &self.default_params)
            .finish_non_exhaustive()
    }
}

/// Link-time component declaration, collected via `inventory`.
///
/// ```ignore
/// inventory::submit! {
///     genlaravel_core::component::StaticComponent {
///         name: "Footer",
///         defaults: || serde_json::Map::new(),
///         render: |_| "<footer></footer>".to_string(),
///     }
/// }
/// ```
pub struct StaticComponent {
    pub name: &'static str,
    pub defaults: fn() -> Params,
    pub render: fn(&Params) -> String,
}

inventory::collect!(StaticComponent);

impl StaticComponent {
    pub fn to_definition(&self) -> ComponentDefinition {
        ComponentDefinition::new(self.name, self.render).with_defaults((self.defaults)())
    }
}
