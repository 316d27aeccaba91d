//! 统一错误类型：最小化枚举，手写 Display，不引入第三方错误栈。
use std::{error::Error as StdError, fmt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PagekitError {
    /// 页面引用了注册表中不存在的组件；index 为其在 PageSpec 中的位置（从 0 开始）
    UnknownComponent { name: String, index: usize },
}

impl fmt::Display for PagekitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PagekitError::UnknownComponent { name, index } => {
                write!(f, "unknown component `{name}` at page position {index}")
            }
        }
    }
}
impl StdError for PagekitError {}

pub type Result<T = ()> = std::result::Result<T, PagekitError>;

/// 非致命告警：解析仍然成功，仅作为信号返回并写入日志
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigWarning {
    /// 非本地主机但未配置后端覆盖地址，已回退到本地开发地址
    MissingOverride,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::MissingOverride => write!(
                f,
                "backend override not configured; falling back to the local development backend"
            ),
        }
    }
}
