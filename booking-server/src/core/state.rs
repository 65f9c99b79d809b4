use std::sync::Arc;

use shared::schedule::ServiceHours;

use crate::booking::{BookingService, TablePool};
use crate::core::Config;
use crate::store::{MemoryStore, ReservationStore};

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc 实现浅拷贝，所有权成本极低。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | store | Arc<dyn ReservationStore> | 预订存储 (内存实现) |
/// | hours | ServiceHours | 营业时间 (周日缩短) |
/// | booking | Arc<BookingService> | 预订提交管线 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 预订存储
    pub store: Arc<dyn ReservationStore>,
    /// 营业时间
    pub hours: ServiceHours,
    /// 预订提交管线
    pub booking: Arc<BookingService>,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`ServerState::initialize`] 方法代替；测试场景可以
    /// 注入自定义的存储实现。
    pub fn new(config: Config, store: Arc<dyn ReservationStore>, hours: ServiceHours) -> Self {
        let booking = Arc::new(BookingService::new(store.clone(), hours));
        Self {
            config,
            store,
            hours,
            booking,
        }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 餐桌池 (1..=table_count)
    /// 2. 内存存储 (可选载入演示数据)
    /// 3. 预订管线 (营业时间来自配置)
    pub async fn initialize(config: &Config) -> Self {
        let tables = TablePool::new(config.table_count);

        let store: Arc<dyn ReservationStore> = if config.seed_demo_data {
            Arc::new(MemoryStore::with_seed_data(tables))
        } else {
            Arc::new(MemoryStore::new(tables))
        };

        let hours = config.hours;
        Self::new(config.clone(), store, hours)
    }
}
