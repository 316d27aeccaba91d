//! 示例：以内存探针模拟后端，展示队列状态检查与失败回退。
use std::time::Duration;

use genlaravel_core::config::{Environment, Protocol, Resolution};
use genlaravel_core::prelude::*;
use genlaravel_core::queue::check_queue_status_within;

struct OfflineBackend;

#[async_trait::async_trait]
impl QueueStatusProbe for OfflineBackend {
    async fn fetch(&self, url: &str) -> anyhow::Result<QueueStatus> {
        anyhow::bail!("no route to {url}")
    }
}

struct BusyBackend;

#[async_trait::async_trait]
impl QueueStatusProbe for BusyBackend {
    async fn fetch(&self, _url: &str) -> anyhow::Result<QueueStatus> {
        QueueStatus::from_json(r#"{"is_busy":true,"queue_size":2,"message":"Generation in progress"}"#)
    }
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    genlaravel_core::telemetry::init();

    let env = Environment::from_env("myapp.vercel.app", Protocol::Https);
    let Resolution { config, warning } = resolve(&env);
    if let Some(w) = warning {
        tracing::info!(%w, "continuing with fallback backend");
    }

    let busy = check_queue_status_within(&BusyBackend, &config, Duration::from_secs(2)).await;
    tracing::info!(?busy, "busy backend");
    let offline = check_queue_status_within(&OfflineBackend, &config, Duration::from_secs(2)).await;
    tracing::info!(?offline, "offline backend");
    Ok(())
}
