use thiserror::Error;

/// 服务器生命周期错误 (启动/关闭)
///
/// 请求级错误走 [`shared::error::AppError`]，这里只覆盖进程级失败。
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("内部服务器错误")]
    Internal(#[from] anyhow::Error),
}

/// 服务器生命周期的 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
