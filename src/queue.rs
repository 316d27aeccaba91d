// 队列状态检查：网络传输由调用方提供，这里只约定请求地址与失败时的回退值。
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{config::ResolvedConfig, endpoints::Endpoint};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueStatus {
    pub is_busy: bool,
    pub queue_size: u64,
    pub message: String,
}

impl QueueStatus {
    /// 传输失败时调用方应使用的约定值
    pub fn unknown() -> Self {
        Self {
            is_busy: false,
            queue_size: 0,
            message: "Unknown".to_string(),
        }
    }

    pub fn from_json(body: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(body)?)
    }
}

impl Default for QueueStatus {
    fn default() -> Self {
        Self::unknown()
    }
}

/// Transport seam for the queue-status request (HTTP client, mock, ...).
#[async_trait]
pub trait QueueStatusProbe: Send + Sync {
    async fn fetch(&self, url: &str) -> anyhow::Result<QueueStatus>;
}

pub async fn check_queue_status<P>(probe: &P, config: &ResolvedConfig) -> QueueStatus
where
    P: QueueStatusProbe + ?Sized,
{
    let url = Endpoint::QueueStatus.url(config);
    match probe.fetch(&url).await {
        Ok(status) => status,
        Err(e) => {
            tracing::error!(target: "genlaravel::queue", url = %url, error = %e, "failed to check queue status");
            QueueStatus::unknown()
        }
    }
}

/// 与 [`check_queue_status`] 相同，但超时同样回退为 `unknown()`
pub async fn check_queue_status_within<P>(
    probe: &P,
    config: &ResolvedConfig,
    limit: Duration,
) -> QueueStatus
where
    P: QueueStatusProbe + ?Sized,
{
    match tokio::time::timeout(limit, check_queue_status(probe, config)).await {
        Ok(status) => status,
        Err(_) => {
            tracing::error!(target: "genlaravel::queue", ?limit, "queue status check timed out");
            QueueStatus::unknown()
        }
    }
}
