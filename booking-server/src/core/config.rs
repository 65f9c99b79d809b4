use chrono::NaiveTime;

use shared::schedule::{SeatingWindow, ServiceHours};

/// 服务器配置 - 预订服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | TABLE_COUNT | 30 | 餐桌总数 (1..=N) |
/// | SEED_DEMO_DATA | true | 启动时载入演示数据 |
/// | SERVICE_OPEN | 17:00 | 周一至周六开始入座时间 |
/// | LAST_SEATING | 22:30 | 周一至周六最后入座时间 |
/// | SUNDAY_OPEN | 17:00 | 周日开始入座时间 |
/// | SUNDAY_LAST_SEATING | 20:30 | 周日最后入座时间 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (无) | 日志文件目录，未设置时仅输出到终端 |
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=8080 TABLE_COUNT=12 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 餐桌总数，预订时从 1..=table_count 中分配
    pub table_count: u32,
    /// 启动时是否载入演示数据 (不可用时段 + 示例预订)
    pub seed_demo_data: bool,
    /// 营业时间 (节假日调整通过环境变量，无需改代码)
    pub hours: ServiceHours,
    /// 日志级别
    pub log_level: String,
    /// 日志文件目录 (可选)
    pub log_dir: Option<String>,
}

/// 解析 HH:MM 格式的时间环境变量，解析失败时回退默认值
fn time_var(name: &str, default: NaiveTime) -> NaiveTime {
    std::env::var(name)
        .ok()
        .and_then(|v| NaiveTime::parse_from_str(&v, "%H:%M").ok())
        .unwrap_or(default)
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        let defaults = ServiceHours::default();
        let hours = ServiceHours::new(
            SeatingWindow::new(
                time_var("SERVICE_OPEN", defaults.standard.first),
                time_var("LAST_SEATING", defaults.standard.last),
            ),
            SeatingWindow::new(
                time_var("SUNDAY_OPEN", defaults.sunday.first),
                time_var("SUNDAY_LAST_SEATING", defaults.sunday.last),
            ),
        );

        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            table_count: std::env::var("TABLE_COUNT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30),
            seed_demo_data: std::env::var("SEED_DEMO_DATA")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            hours,
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(http_port: u16, table_count: u32, seed_demo_data: bool) -> Self {
        let mut config = Self::from_env();
        config.http_port = http_port;
        config.table_count = table_count;
        config.seed_demo_data = seed_demo_data;
        config
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
