//! # 基础设施组合层
//!
//! 这个 crate 是组件装配示例的组合层，负责将注册表、配置源与领域组件
//! 组合成一个可运行的整体。
//!
//! ## 主要功能
//!
//! - **组合根**: 注册默认组件，提供手工装配方式
//! - **服务解析器**: 由两个字符串标识符解析出完整装配的业务服务
//! - **解析器构建器**: 使用构建者模式组装解析器与日志系统
//! - **运行器**: 读取配置、计算并报告结果或错误
//!
//! ## 基本使用
//!
//! ```rust,no_run
//! use config_impl::TextConfigProvider;
//! use infrastructure_composition::{ResolverBuilder, Runner};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let resolver = ResolverBuilder::new().with_default_components().build()?;
//!     let runner = Runner::new(resolver);
//!
//!     let config = TextConfigProvider::new("config.txt");
//!     let status = runner.run(&config, &mut std::io::stdout());
//!     std::process::exit(i32::from(status.code()));
//! }
//! ```

pub mod bootstrapper;
pub mod builder;
pub mod resolver;
pub mod runner;

#[cfg(test)]
mod tests;

// 重新导出主要类型
pub use bootstrapper::{
    default_resolver, register_default_components, wire_static, wire_with_setter,
    DEFAULT_PROVIDER, DEFAULT_SERVICE,
};
pub use builder::{init_logging, parse_log_level, LoggingConfig, ResolverBuilder};
pub use resolver::{ProviderFactory, ServiceFactory, ServiceResolver};
pub use runner::{report, run_setter, run_static, RunStatus, Runner};

// 重新导出错误类型
pub use infrastructure_common::InfrastructureError;
