//! 组合根
//!
//! 唯一知道具体实现类型的地方：在此将默认组件注册到解析器，
//! 并提供不经过注册表的手工装配方式。

use crate::resolver::ServiceResolver;
use di_abstractions::{nullary, unary};
use domain::{
    BusinessService, BusinessServiceBuilder, DataProvider, FixedDataProvider,
    TripleBusinessService,
};
use infrastructure_common::{
    ComponentDescriptor, ComponentKind, DependencyError, DependencyResult,
};
use std::sync::Arc;
use tracing::{debug, info};

/// 默认数据提供者标识符
pub const DEFAULT_PROVIDER: &str = "default-provider";

/// 默认业务服务标识符
pub const DEFAULT_SERVICE: &str = "default-service";

/// 设值装配方式的组件名称
const SETTER_WIRING: &str = "setter-wiring";

/// 将默认组件注册到解析器
pub fn register_default_components(resolver: &mut ServiceResolver) -> DependencyResult<()> {
    info!("注册默认组件");

    resolver.register_provider(
        ComponentDescriptor::new(DEFAULT_PROVIDER, ComponentKind::Provider)
            .with_type::<FixedDataProvider>()
            .with_metadata("value", FixedDataProvider::VALUE.to_string()),
        nullary(|| Arc::new(FixedDataProvider::new()) as Arc<dyn DataProvider>),
    )?;

    resolver.register_service(
        ComponentDescriptor::new(DEFAULT_SERVICE, ComponentKind::Service)
            .with_type::<TripleBusinessService>()
            .with_metadata("factor", TripleBusinessService::FACTOR.to_string()),
        unary(|provider: Arc<dyn DataProvider>| {
            Box::new(TripleBusinessService::new(provider)) as Box<dyn BusinessService>
        }),
    )?;

    Ok(())
}

/// 创建注册了默认组件的解析器
pub fn default_resolver() -> DependencyResult<ServiceResolver> {
    let mut resolver = ServiceResolver::new();
    register_default_components(&mut resolver)?;
    Ok(resolver)
}

/// 通过构造函数手工装配，不经过注册表
pub fn wire_static() -> Box<dyn BusinessService> {
    debug!("构造函数装配");
    let provider: Arc<dyn DataProvider> = Arc::new(FixedDataProvider::new());
    Box::new(TripleBusinessService::new(provider))
}

/// 通过设值方式手工装配，不经过注册表
pub fn wire_with_setter() -> DependencyResult<Box<dyn BusinessService>> {
    debug!("设值装配");
    let mut builder = BusinessServiceBuilder::new();
    builder.set_provider(Arc::new(FixedDataProvider::new()));

    let service = builder.build().map_err(|e| {
        DependencyError::construction_failed(ComponentKind::Service, SETTER_WIRING, e)
    })?;
    Ok(Box::new(service))
}
