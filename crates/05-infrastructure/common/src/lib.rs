//! # Infrastructure Common
//!
//! 这个 crate 提供了组件装配示例基础设施层的公共类型。
//!
//! ## 核心类型
//!
//! - [`ComponentKind`] - 组件类别（数据提供者 / 业务服务）
//! - [`ComponentDescriptor`] - 已注册组件的描述信息
//! - [`DependencyError`] - 组件解析与构建错误
//! - [`ConfigError`] - 配置读取错误
//! - [`InfrastructureError`] - 基础设施层统一错误
//!
//! ## 设计原则
//!
//! - 错误保留类别信息，不只是一段消息
//! - 不提供任何进程级全局注册表

pub mod component;
pub mod errors;

pub use component::*;
pub use errors::*;
