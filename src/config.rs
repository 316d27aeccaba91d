// 配置解析：由运行环境快照纯函数式地推导后端地址，不做任何网络 I/O。
use std::{fmt, sync::Arc};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::endpoints::Endpoint;
use crate::error::ConfigWarning;

/// 本地开发后端（同时也是未配置覆盖地址时的回退值）
pub const LOCAL_BACKEND_URL: &str = "http://localhost:8080";
/// Laravel 预览地址，仅在本地有效
pub const LARAVEL_PREVIEW_URL: &str = "http://localhost:8000";
/// `Environment::from_env` 读取的覆盖地址环境变量
pub const BACKEND_URL_ENV: &str = "GENLARAVEL_BACKEND_URL";

const LOCAL_HOSTS: [&str; 2] = ["localhost", "127.0.0.1"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    #[default]
    Http,
    Https,
}

/// Runtime facts a resolution is computed from. Immutable for the duration of a resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Environment {
    pub hostname: String,
    pub protocol: Protocol,
    pub override_base_url: Option<String>,
}

impl Environment {
    pub fn new(hostname: impl Into<String>, protocol: Protocol) -> Self {
        Self {
            hostname: hostname.into(),
            protocol,
            override_base_url: None,
        }
    }

    pub fn with_override(mut self, base_url: impl Into<String>) -> Self {
        self.override_base_url = Some(base_url.into());
        self
    }

    /// 从进程环境变量读取覆盖地址；空字符串视为未设置
    pub fn from_env(hostname: impl Into<String>, protocol: Protocol) -> Self {
        let override_base_url = std::env::var(BACKEND_URL_ENV)
            .ok()
            .filter(|v| !v.is_empty());
        Self {
            hostname: hostname.into(),
            protocol,
            override_base_url,
        }
    }

    fn configured_override(&self) -> Option<&str> {
        self.override_base_url.as_deref().filter(|s| !s.is_empty())
    }

    fn is_local(&self) -> bool {
        LOCAL_HOSTS.contains(&self.hostname.as_str())
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new("localhost", Protocol::Http)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WsProtocol {
    Ws,
    Wss,
}

impl WsProtocol {
    pub fn for_base_url(base_url: &str) -> Self {
        if base_url.starts_with("https://") {
            WsProtocol::Wss
        } else {
            WsProtocol::Ws
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WsProtocol::Ws => "ws:",
            WsProtocol::Wss => "wss:",
        }
    }
}

impl fmt::Display for WsProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Backend addresses derived from one [`Environment`].
///
/// Fields are private so that `ws_protocol` can never drift from the scheme of
/// `backend_base_url`; a new environment produces a new value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedConfig {
    backend_base_url: String,
    ws_protocol: WsProtocol,
    is_production: bool,
    laravel_url: String,
}

impl ResolvedConfig {
    fn new(backend_base_url: String, is_production: bool) -> Self {
        let ws_protocol = WsProtocol::for_base_url(&backend_base_url);
        Self {
            backend_base_url,
            ws_protocol,
            is_production,
            laravel_url: LARAVEL_PREVIEW_URL.to_string(),
        }
    }

    pub fn backend_base_url(&self) -> &str {
        &self.backend_base_url
    }
    pub fn ws_protocol(&self) -> WsProtocol {
        self.ws_protocol
    }
    pub fn is_production(&self) -> bool {
        self.is_production
    }
    pub fn laravel_url(&self) -> &str {
        &self.laravel_url
    }

    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.backend_base_url, path)
    }

    pub fn websocket_url(&self, path: &str) -> String {
        format!(
            "{}//{}{}",
            self.ws_protocol,
            strip_scheme(&self.backend_base_url),
            path
        )
    }

    pub fn unified_websocket_url(&self) -> String {
        Endpoint::Generate.url(self)
    }

    /// 输出当前配置摘要（debug 级别）
    pub fn log_summary(&self) {
        tracing::debug!(
            target: "genlaravel::config",
            backend_url = %self.backend_base_url,
            ws_protocol = %self.ws_protocol,
            ws_url = %self.unified_websocket_url(),
            is_production = self.is_production,
            "resolved config"
        );
    }
}

/// 仅去掉开头的 `http://` 或 `https://`，其余原样保留
pub fn strip_scheme(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}

/// Result of [`resolve`]: the config plus the optional non-fatal warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub config: ResolvedConfig,
    pub warning: Option<ConfigWarning>,
}

impl Resolution {
    pub fn into_config(self) -> ResolvedConfig {
        self.config
    }
}

/// Resolve backend addresses for `env`. First match wins:
/// configured override, then local host, then the local fallback with a
/// [`ConfigWarning::MissingOverride`].
pub fn resolve(env: &Environment) -> Resolution {
    let resolution = if let Some(url) = env.configured_override() {
        Resolution {
            config: ResolvedConfig::new(url.to_string(), true),
            warning: None,
        }
    } else if env.is_local() {
        Resolution {
            config: ResolvedConfig::new(LOCAL_BACKEND_URL.to_string(), false),
            warning: None,
        }
    } else {
        tracing::warn!(
            target: "genlaravel::config",
            hostname = %env.hostname,
            env_var = BACKEND_URL_ENV,
            fallback = LOCAL_BACKEND_URL,
            "backend override not configured; using local fallback"
        );
        Resolution {
            config: ResolvedConfig::new(LOCAL_BACKEND_URL.to_string(), false),
            warning: Some(ConfigWarning::MissingOverride),
        }
    };
    if env.hostname == "localhost" {
        resolution.config.log_summary();
    }
    resolution
}

/// 便捷入口：告警已写入日志，只返回配置本身
pub fn resolve_config(env: &Environment) -> ResolvedConfig {
    resolve(env).into_config()
}

/// 线程安全的配置缓存：环境变化时整体替换，从不原地修改
#[derive(Clone)]
pub struct ConfigHandle {
    inner: Arc<RwLock<Cached>>,
}

struct Cached {
    env: Environment,
    config: Arc<ResolvedConfig>,
}

impl fmt::Debug for ConfigHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cached = self.inner.read();
        f.debug_struct("ConfigHandle")
            .field("env", &cached.env)
            .field("config", &cached.config)
            .finish()
    }
}

impl ConfigHandle {
    pub fn new(env: Environment) -> Self {
        let config = Arc::new(resolve_config(&env));
        Self {
            inner: Arc::new(RwLock::new(Cached { env, config })),
        }
    }

    pub fn current(&self) -> Arc<ResolvedConfig> {
        self.inner.read().config.clone()
    }

    pub fn environment(&self) -> Environment {
        self.inner.read().env.clone()
    }

    /// 环境未变化时直接复用缓存，不重新解析也不重复告警
    pub fn update(&self, env: Environment) -> Option<ConfigWarning> {
        if self.inner.read().env == env {
            return None;
        }
        let Resolution { config, warning } = resolve(&env);
        let mut cached = self.inner.write();
        cached.env = env;
        cached.config = Arc::new(config);
        warning
    }
}
