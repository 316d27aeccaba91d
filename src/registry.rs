use std::{collections::HashMap, sync::Arc};

use crate::component::{ComponentDefinition, StaticComponent};

/// Name-to-definition lookup supplied by the host application.
/// Lookup is case-sensitive; the key is the component's canonical name.
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    components: HashMap<String, Arc<ComponentDefinition>>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from every `StaticComponent` submitted through `inventory`.
    pub fn discover() -> Self {
        let mut reg = Self::new();
        for decl in inventory::iter::<StaticComponent> {
            reg.register(decl.to_definition());
        }
        tracing::debug!(target: "genlaravel::registry", count = reg.len(), "discovered static components");
        reg
    }

    /// 同名重复注册：后写入者生效并告警
    pub fn register(&mut self, def: ComponentDefinition) -> &mut Self {
        let name = def.name().to_string();
        if self.components.contains_key(&name) {
            tracing::warn!(target: "genlaravel::registry", component = %name, "component registered multiple times; overriding");
        }
        self.components.insert(name, Arc::new(def));
        self
    }

    pub fn with(mut self, def: ComponentDefinition) -> Self {
        self.register(def);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Arc<ComponentDefinition>> {
        self.components.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// 已注册组件名（排序后返回，便于稳定输出）
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.components.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl FromIterator<ComponentDefinition> for ComponentRegistry {
    fn from_iter<I: IntoIterator<Item = ComponentDefinition>>(iter: I) -> Self {
        let mut reg = Self::new();
        for def in iter {
            reg.register(def);
        }
        reg
    }
}
