//! # Dependency Injection Abstractions
//!
//! 依赖注入抽象层，定义按名称注册组件与解析组件的核心接口。
//!
//! ## 核心接口
//!
//! - [`ComponentRegistry`] - 以字符串标识符为键的组件注册表接口
//! - [`ComponentResolver`] - 由两个标识符解析出已装配组件的解析器接口
//! - [`NullaryFactory`] / [`UnaryFactory`] - 组件工厂函数类型

pub mod factory;
pub mod registry;
pub mod resolver;

pub use factory::*;
pub use registry::*;
pub use resolver::*;
