pub mod component;
pub mod compose;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod page;
pub mod queue;
pub mod registry;
pub mod site;
pub mod telemetry;

pub mod prelude {
    pub use crate::component::{ComponentDefinition, Params};
    pub use crate::compose::{compose, LayoutHint, RenderNode};
    // 配置解析：纯函数入口 + 缓存句柄
    pub use crate::config::{resolve, resolve_config, ConfigHandle, Environment, Protocol, ResolvedConfig};
    pub use crate::endpoints::Endpoint;
    pub use crate::error::{ConfigWarning, PagekitError, Result};
    pub use crate::page::{ComponentReference, PageSpec};
    pub use crate::queue::{check_queue_status, QueueStatus, QueueStatusProbe};
    pub use crate::registry::ComponentRegistry;
    pub use crate::site::{ComposedPage, Site};
}
