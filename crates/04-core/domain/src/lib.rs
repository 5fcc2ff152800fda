//! # Domain
//!
//! 核心领域契约：数据提供者与业务服务。
//!
//! - [`DataProvider`] - 提供原始数值
//! - [`BusinessService`] - 基于数据提供者计算派生值
//! - [`BusinessServiceBuilder`] - 设值风格的装配方式

pub mod builder;
pub mod provider;
pub mod service;

pub use builder::*;
pub use provider::*;
pub use service::*;

use thiserror::Error;

/// 领域错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("缺少依赖: {dependency}")]
    MissingDependency { dependency: &'static str },
}
