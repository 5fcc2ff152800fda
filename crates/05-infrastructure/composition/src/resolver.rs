//! 注册表驱动的组件解析器

use di_abstractions::{ComponentRegistry, ComponentResolver, NullaryFactory, UnaryFactory};
use di_impl::NamedRegistry;
use domain::{BusinessService, DataProvider};
use infrastructure_common::{
    ComponentDescriptor, ComponentKind, DependencyError, DependencyResult,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// 数据提供者工厂
pub type ProviderFactory = NullaryFactory<Arc<dyn DataProvider>>;

/// 业务服务工厂，参数为已构建的数据提供者
pub type ServiceFactory = UnaryFactory<Arc<dyn DataProvider>, Box<dyn BusinessService>>;

/// 服务解析器
///
/// 持有两张按名称注册的工厂表：一张用于数据提供者，一张用于业务服务。
#[derive(Debug)]
pub struct ServiceResolver {
    providers: NamedRegistry<ProviderFactory>,
    services: NamedRegistry<ServiceFactory>,
}

impl ServiceResolver {
    /// 创建空的解析器
    pub fn new() -> Self {
        Self {
            providers: NamedRegistry::new(ComponentKind::Provider),
            services: NamedRegistry::new(ComponentKind::Service),
        }
    }

    /// 注册数据提供者工厂
    pub fn register_provider(
        &mut self,
        descriptor: ComponentDescriptor,
        factory: ProviderFactory,
    ) -> DependencyResult<()> {
        self.providers.register(descriptor, factory)
    }

    /// 注册业务服务工厂
    pub fn register_service(
        &mut self,
        descriptor: ComponentDescriptor,
        factory: ServiceFactory,
    ) -> DependencyResult<()> {
        self.services.register(descriptor, factory)
    }

    /// 数据提供者注册表
    pub fn providers(&self) -> &NamedRegistry<ProviderFactory> {
        &self.providers
    }

    /// 业务服务注册表
    pub fn services(&self) -> &NamedRegistry<ServiceFactory> {
        &self.services
    }

    fn construct_provider(&self, name: &str) -> DependencyResult<Arc<dyn DataProvider>> {
        let factory = self.providers.lookup(name)?;
        factory().map_err(|source| {
            warn!("数据提供者创建失败: {}, 原因: {}", name, source);
            DependencyError::construction_failed(ComponentKind::Provider, name, source)
        })
    }

    fn construct_service(
        &self,
        name: &str,
        provider: Arc<dyn DataProvider>,
    ) -> DependencyResult<Box<dyn BusinessService>> {
        let factory = self.services.lookup(name)?;
        factory(provider).map_err(|source| {
            warn!("业务服务创建失败: {}, 原因: {}", name, source);
            DependencyError::construction_failed(ComponentKind::Service, name, source)
        })
    }
}

impl Default for ServiceResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentResolver for ServiceResolver {
    type Output = Box<dyn BusinessService>;

    fn resolve(&self, provider_name: &str, service_name: &str) -> DependencyResult<Self::Output> {
        debug!("解析组件: provider={:?}, service={:?}", provider_name, service_name);

        let provider = self.construct_provider(provider_name)?;
        let service = self.construct_service(service_name, provider)?;

        info!("组件装配完成: {} -> {}", provider_name, service_name);
        Ok(service)
    }

    fn can_resolve(&self, provider_name: &str, service_name: &str) -> bool {
        self.providers.is_registered(provider_name) && self.services.is_registered(service_name)
    }

    fn get_registered_components(&self) -> Vec<ComponentDescriptor> {
        let mut components = self.providers.get_registered_components();
        components.extend(self.services.get_registered_components());
        components
    }
}
