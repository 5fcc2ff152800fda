//! 业务服务

use crate::provider::DataProvider;
use std::fmt::Debug;
use std::sync::Arc;
use tracing::debug;

/// 业务服务 trait
pub trait BusinessService: Send + Sync + Debug {
    /// 计算派生值
    fn compute(&self) -> f64;
}

/// 三倍业务服务：返回数据提供者数值的三倍
///
/// 唯一的构造方式要求传入数据提供者，因此不存在未装配的实例。
/// 数据提供者以 `Arc` 共享，其生命周期独立于服务。
#[derive(Debug, Clone)]
pub struct TripleBusinessService {
    provider: Arc<dyn DataProvider>,
}

impl TripleBusinessService {
    /// 乘数
    pub const FACTOR: f64 = 3.0;

    /// 通过构造函数注入数据提供者
    pub fn new(provider: Arc<dyn DataProvider>) -> Self {
        Self { provider }
    }

    /// 已注入的数据提供者
    pub fn provider(&self) -> &Arc<dyn DataProvider> {
        &self.provider
    }
}

impl BusinessService for TripleBusinessService {
    fn compute(&self) -> f64 {
        let value = self.provider.fetch_value();
        debug!("计算: {} * {}", value, Self::FACTOR);
        value * Self::FACTOR
    }
}
