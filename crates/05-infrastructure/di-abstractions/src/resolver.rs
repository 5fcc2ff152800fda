//! 组件解析器抽象接口
//!
//! 由一个数据提供者标识符和一个业务服务标识符构建出完整装配的组件

use infrastructure_common::{ComponentDescriptor, DependencyResult};

/// 组件解析器 trait
///
/// 实现必须保证：返回的实例已完成装配，失败时不会泄漏部分装配的实例；
/// 每次调用均构建新的实例。
pub trait ComponentResolver {
    /// 解析结果类型
    type Output;

    /// 解析并装配组件
    fn resolve(&self, provider_name: &str, service_name: &str) -> DependencyResult<Self::Output>;

    /// 检查两个标识符是否都已注册
    fn can_resolve(&self, provider_name: &str, service_name: &str) -> bool;

    /// 获取所有可解析的组件描述符
    fn get_registered_components(&self) -> Vec<ComponentDescriptor>;
}
