//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`logger`] - 日志初始化 (stdout 或按日滚动文件)

pub mod logger;

pub use logger::{init_logger, init_logger_with_file};
