//! 数据提供者

use std::fmt::Debug;

/// 数据提供者 trait
pub trait DataProvider: Send + Sync + Debug {
    /// 获取原始数值
    fn fetch_value(&self) -> f64;
}

/// 固定值数据提供者，始终返回 20
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedDataProvider;

impl FixedDataProvider {
    /// 固定返回值
    pub const VALUE: f64 = 20.0;

    /// 创建固定值数据提供者
    pub fn new() -> Self {
        Self
    }
}

impl DataProvider for FixedDataProvider {
    fn fetch_value(&self) -> f64 {
        Self::VALUE
    }
}
