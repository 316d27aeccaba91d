use std::sync::Arc;

use crate::{
    compose::{compose, RenderNode},
    config::{ConfigHandle, Environment, ResolvedConfig},
    error::{ConfigWarning, Result},
    page::PageSpec,
    registry::ComponentRegistry,
};

/// 站点门面：先解析配置，再组合页面；注册表在构造后只读
pub struct Site {
    config: ConfigHandle,
    registry: Arc<ComponentRegistry>,
}

impl Site {
    pub fn new(env: Environment, registry: ComponentRegistry) -> Self {
        if registry.is_empty() {
            tracing::warn!(target: "genlaravel::site", "site created with an empty component registry");
        }
        Self {
            config: ConfigHandle::new(env),
            registry: Arc::new(registry),
        }
    }

    /// 使用 inventory 收集到的静态组件
    pub fn discover(env: Environment) -> Self {
        Self::new(env, ComponentRegistry::discover())
    }

    /// 环境变化时整体重新解析；相同环境为空操作
    pub fn set_environment(&self, env: Environment) -> Option<ConfigWarning> {
        self.config.update(env)
    }

    pub fn config(&self) -> Arc<ResolvedConfig> {
        self.config.current()
    }

    pub fn config_handle(&self) -> ConfigHandle {
        self.config.clone()
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    pub fn compose(&self, page: &PageSpec) -> Result<ComposedPage> {
        let config = self.config.current();
        let nodes = compose(page, &self.registry).map_err(|e| {
            tracing::error!(target: "genlaravel::site", error = %e, "page composition failed");
            e
        })?;
        Ok(ComposedPage { config, nodes })
    }
}

/// A composed page together with the config snapshot it was composed under.
#[derive(Debug, Clone)]
pub struct ComposedPage {
    pub config: Arc<ResolvedConfig>,
    pub nodes: Vec<RenderNode>,
}

impl ComposedPage {
    pub fn render(&self) -> Vec<String> {
        self.nodes.iter().map(RenderNode::render).collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
