//! 配置提供者抽象接口

use infrastructure_common::{ConfigError, ConfigResult};
use std::path::Path;

/// 组件装配配置
///
/// 标识符原样保存，不做大小写转换或裁剪。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentConfig {
    /// 数据提供者标识符
    pub provider: String,
    /// 业务服务标识符
    pub service: String,
}

impl ComponentConfig {
    /// 由两个标识符创建装配配置
    pub fn new(provider: impl Into<String>, service: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            service: service.into(),
        }
    }

    /// 校验两个标识符均非空
    pub fn validate(&self) -> ConfigResult<()> {
        if self.provider.is_empty() {
            return Err(ConfigError::format("provider", "数据提供者标识符为空"));
        }
        if self.service.is_empty() {
            return Err(ConfigError::format("service", "业务服务标识符为空"));
        }
        Ok(())
    }
}

/// 配置提供者 trait
///
/// 定义从不同数据源获取装配配置的统一接口
pub trait ConfigProvider {
    /// 读取装配配置
    fn load(&self) -> ConfigResult<ComponentConfig>;

    /// 获取提供者名称
    fn name(&self) -> &str;

    /// 配置源路径（非文件源返回 `None`）
    fn source_path(&self) -> Option<&Path> {
        None
    }
}

/// 内存配置提供者，主要用于测试与静态装配
#[derive(Debug, Clone)]
pub struct StaticConfigProvider {
    config: ComponentConfig,
}

impl StaticConfigProvider {
    /// 使用内存中的配置创建提供者
    pub fn new(config: ComponentConfig) -> Self {
        Self { config }
    }
}

impl ConfigProvider for StaticConfigProvider {
    fn load(&self) -> ConfigResult<ComponentConfig> {
        self.config.validate()?;
        Ok(self.config.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_provider_returns_config() {
        let provider =
            StaticConfigProvider::new(ComponentConfig::new("default-provider", "default-service"));
        let config = provider.load().unwrap();
        assert_eq!(config.provider, "default-provider");
        assert_eq!(config.service, "default-service");
        assert!(provider.source_path().is_none());
    }

    #[test]
    fn test_empty_identifier_is_format_error() {
        let provider = StaticConfigProvider::new(ComponentConfig::new("default-provider", ""));
        let err = provider.load().unwrap_err();
        assert!(matches!(err, ConfigError::Format { ref field, .. } if field == "service"));
    }
}
