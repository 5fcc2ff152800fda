//! # Configuration Implementation
//!
//! 装配配置的具体实现。
//!
//! ## 主要组件
//!
//! - [`TextConfigProvider`] - 两行文本配置提供者
//! - [`TomlConfigProvider`] - TOML 配置提供者
//! - [`provider_for_path`] - 按文件扩展名选择配置提供者

pub mod providers;

pub use providers::*;
