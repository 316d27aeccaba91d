// 日志初始化：fmt 输出 + ANSI；重复调用安全（已安装时忽略）。
use tracing::Level;

pub fn init() {
    init_with_level(Level::INFO);
}

pub fn init_with_level(level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(true)
        .with_ansi(true)
        .try_init();
}
