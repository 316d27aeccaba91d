// 组合引擎：PageSpec + 注册表 -> 有序 RenderNode 序列；只决定“用哪个组件、什么参数、放哪边”，不渲染。
use std::sync::Arc;

use serde_json::Value;
use smallvec::SmallVec;

use crate::{
    component::{ComponentDefinition, Params},
    error::{PagekitError, Result},
    page::{ComponentReference, PageSpec, REPEAT_KEY},
    registry::ComponentRegistry,
};

/// 非对象类型的重复条目以该键并入参数
pub const ITEM_KEY: &str = "item";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LayoutHint {
    #[default]
    None,
    Left,
    Right,
}

impl LayoutHint {
    /// 仅由结构位置决定：偶数在左，奇数在右
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            LayoutHint::Left
        } else {
            LayoutHint::Right
        }
    }
}

/// One resolved component instance, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderNode {
    component: Arc<ComponentDefinition>,
    resolved_params: Params,
    layout_hint: LayoutHint,
}

impl RenderNode {
    pub fn component(&self) -> &ComponentDefinition {
        &self.component
    }
    pub fn name(&self) -> &str {
        self.component.name()
    }
    pub fn resolved_params(&self) -> &Params {
        &self.resolved_params
    }
    pub fn param(&self, key: &str) -> Option<&Value> {
        self.resolved_params.get(key)
    }
    pub fn layout_hint(&self) -> LayoutHint {
        self.layout_hint
    }

    pub fn render(&self) -> String {
        self.component.render(&self.resolved_params)
    }
}

/// Expand `page` against `registry`.
///
/// Fails fast on the first reference whose component is not registered; no
/// partial sequence is returned.
pub fn compose(page: &PageSpec, registry: &ComponentRegistry) -> Result<Vec<RenderNode>> {
    let mut nodes = Vec::with_capacity(page.len());
    for (index, reference) in page.iter().enumerate() {
        let def = registry
            .get(&reference.component)
            .ok_or_else(|| PagekitError::UnknownComponent {
                name: reference.component.clone(),
                index,
            })?;
        nodes.extend(expand(def, reference));
    }
    tracing::trace!(target: "genlaravel::compose", references = page.len(), nodes = nodes.len(), "page composed");
    Ok(nodes)
}

fn expand(def: &Arc<ComponentDefinition>, reference: &ComponentReference) -> SmallVec<[RenderNode; 4]> {
    let mut params = def.default_params().clone();
    // 只有引用自身声明的 repeat 才展开；默认参数里的 repeat 直接丢弃
    params.remove(REPEAT_KEY);
    overlay(&mut params, &reference.params);

    let items = match params.remove(REPEAT_KEY) {
        Some(Value::Array(items)) => items,
        Some(other) => {
            tracing::warn!(
                target: "genlaravel::compose",
                component = %def.name(),
                kind = json_kind(&other),
                "`repeat` is not an array; treating it as a plain parameter"
            );
            params.insert(REPEAT_KEY.to_string(), other);
            return single(def, params);
        }
        None => return single(def, params),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            let mut item_params = params.clone();
            match item {
                Value::Object(fields) => overlay(&mut item_params, &fields),
                other => {
                    item_params.insert(ITEM_KEY.to_string(), other);
                }
            }
            RenderNode {
                component: def.clone(),
                resolved_params: item_params,
                layout_hint: LayoutHint::for_index(i),
            }
        })
        .collect()
}

fn single(def: &Arc<ComponentDefinition>, params: Params) -> SmallVec<[RenderNode; 4]> {
    let mut out = SmallVec::new();
    out.push(RenderNode {
        component: def.clone(),
        resolved_params: params,
        layout_hint: LayoutHint::None,
    });
    out
}

// 浅合并：只覆盖顶层键
fn overlay(base: &mut Params, top: &Params) {
    for (k, v) in top {
        base.insert(k.clone(), v.clone());
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
