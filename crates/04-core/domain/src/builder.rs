//! 设值风格的业务服务装配
//!
//! 依赖可以在构造之后逐步设置，但只有在依赖齐全时才能得到服务实例。

use crate::provider::DataProvider;
use crate::service::TripleBusinessService;
use crate::DomainError;
use std::sync::Arc;

/// 业务服务构建器
#[derive(Debug, Default)]
pub struct BusinessServiceBuilder {
    provider: Option<Arc<dyn DataProvider>>,
}

impl BusinessServiceBuilder {
    /// 创建未设置依赖的构建器
    pub fn new() -> Self {
        Self::default()
    }

    /// 以链式方式设置数据提供者
    pub fn provider(mut self, provider: Arc<dyn DataProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// 设置数据提供者，重复设置时后者覆盖前者
    pub fn set_provider(&mut self, provider: Arc<dyn DataProvider>) {
        self.provider = Some(provider);
    }

    /// 构建服务，缺少数据提供者时失败
    pub fn build(self) -> Result<TripleBusinessService, DomainError> {
        let provider = self.provider.ok_or(DomainError::MissingDependency {
            dependency: "DataProvider",
        })?;
        Ok(TripleBusinessService::new(provider))
    }
}
