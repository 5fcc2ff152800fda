//! # Configuration Abstractions
//!
//! 组件装配配置的抽象接口。
//!
//! - [`ComponentConfig`] - 数据提供者与业务服务的标识符对
//! - [`ConfigProvider`] - 从不同数据源读取装配配置的统一接口

pub mod provider;

pub use provider::*;
