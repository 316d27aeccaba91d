use crate::config::ResolvedConfig;

pub const WS_GENERATE: &str = "/ws/generate";
pub const WS_GENERATE_SINGLE: &str = "/ws/generate/single";
pub const WS_GENERATE_MULTI: &str = "/ws/generate/multi";
pub const API_QUEUE_STATUS: &str = "/api/queue/status";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointKind {
    WebSocket,
    Api,
}

/// Backend paths that form the wire contract with the generator service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// 统一生成通道（推荐）
    Generate,
    // 旧版通道，保留兼容
    GenerateSingle,
    GenerateMulti,
    QueueStatus,
}

impl Endpoint {
    pub const ALL: [Endpoint; 4] = [
        Endpoint::Generate,
        Endpoint::GenerateSingle,
        Endpoint::GenerateMulti,
        Endpoint::QueueStatus,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Generate => WS_GENERATE,
            Endpoint::GenerateSingle => WS_GENERATE_SINGLE,
            Endpoint::GenerateMulti => WS_GENERATE_MULTI,
            Endpoint::QueueStatus => API_QUEUE_STATUS,
        }
    }

    pub fn kind(&self) -> EndpointKind {
        match self {
            Endpoint::QueueStatus => EndpointKind::Api,
            _ => EndpointKind::WebSocket,
        }
    }

    pub fn url(&self, config: &ResolvedConfig) -> String {
        match self.kind() {
            EndpointKind::WebSocket => config.websocket_url(self.path()),
            EndpointKind::Api => config.endpoint_url(self.path()),
        }
    }
}
