//! 组件工厂函数类型
//!
//! 工厂可能失败，失败原因以装箱错误返回，由解析器转换为
//! [`DependencyError::ConstructionFailed`](infrastructure_common::DependencyError::ConstructionFailed)。

use infrastructure_common::BoxError;

/// 无参组件工厂
pub type NullaryFactory<T> = Box<dyn Fn() -> Result<T, BoxError> + Send + Sync>;

/// 单参组件工厂，参数为已构建的依赖
pub type UnaryFactory<A, T> = Box<dyn Fn(A) -> Result<T, BoxError> + Send + Sync>;

/// 将不会失败的构造函数包装为无参工厂
pub fn nullary<T, F>(constructor: F) -> NullaryFactory<T>
where
    T: 'static,
    F: Fn() -> T + Send + Sync + 'static,
{
    Box::new(move || Ok(constructor()))
}

/// 将不会失败的构造函数包装为单参工厂
pub fn unary<A, T, F>(constructor: F) -> UnaryFactory<A, T>
where
    A: 'static,
    T: 'static,
    F: Fn(A) -> T + Send + Sync + 'static,
{
    Box::new(move |dependency| Ok(constructor(dependency)))
}
