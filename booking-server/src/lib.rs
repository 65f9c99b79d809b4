//! Cafe Fausse Booking Server - 餐厅预订服务
//!
//! # 架构概述
//!
//! 本模块是预订服务的主入口，提供以下核心功能：
//!
//! - **预订管线** (`booking`): 字段校验、营业时间、档期复查、餐桌分配
//! - **存储** (`store`): 可注入的预订存储接口与内存实现
//! - **HTTP API** (`api`): 档期查询、预订提交、健康检查
//!
//! # 模块结构
//!
//! ```text
//! booking-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── booking/       # 预订管线和餐桌池
//! ├── store/         # 存储接口与内存实现
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 日志等工具
//! ```

pub mod api;
pub mod booking;
pub mod core;
pub mod store;
pub mod utils;

// Re-export 公共类型
pub use booking::{BookingService, TablePool};
pub use core::{Config, Server, ServerState};
pub use store::{MemoryStore, ReservationStore};

// Re-export unified error types from shared
pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
   ______      ____
  / ____/___ _/ __/__
 / /   / __ `/ /_/ _ \
/ /___/ /_/ / __/  __/
\____/\__,_/_/  \___/
    ______
   / ____/___ ___  ______________
  / /_  / __ `/ / / / ___/ ___/ _ \
 / __/ / /_/ / /_/ (__  |__  )  __/
/_/    \__,_/\__,_/____/____/\___/
    "#
    );
}
