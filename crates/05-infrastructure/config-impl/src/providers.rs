//! 配置提供者实现

use config_abstractions::{ComponentConfig, ConfigProvider};
use infrastructure_common::{ConfigError, ConfigResult};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 读取文件内容，文件不存在时返回 `FileNotFound`
fn read_config_file(path: &Path) -> ConfigResult<String> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    Ok(std::fs::read_to_string(path)?)
}

/// 两行文本配置提供者
///
/// 第一行为数据提供者标识符，第二行为业务服务标识符，其余行忽略。
/// 仅去除行尾换行符（`\n` 或 `\r\n`），标识符本身不做裁剪。
#[derive(Debug, Clone)]
pub struct TextConfigProvider {
    file_path: PathBuf,
}

impl TextConfigProvider {
    /// 创建指向文本文件的配置提供者
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            file_path: path.as_ref().to_path_buf(),
        }
    }

    /// 从文本内容解析装配配置
    pub fn parse(content: &str) -> ConfigResult<ComponentConfig> {
        let mut lines = content.lines();
        let provider = required_line(lines.next(), 1, "数据提供者标识符")?;
        let service = required_line(lines.next(), 2, "业务服务标识符")?;
        Ok(ComponentConfig::new(provider, service))
    }
}

fn required_line<'a>(line: Option<&'a str>, number: usize, what: &str) -> ConfigResult<&'a str> {
    match line {
        Some(line) if !line.is_empty() => Ok(line),
        Some(_) => Err(ConfigError::format(
            format!("line {number}"),
            format!("{what}为空"),
        )),
        None => Err(ConfigError::format(
            format!("line {number}"),
            format!("需要{what}"),
        )),
    }
}

impl ConfigProvider for TextConfigProvider {
    fn load(&self) -> ConfigResult<ComponentConfig> {
        debug!("加载文本配置文件: {}", self.file_path.display());
        let content = read_config_file(&self.file_path)?;
        let config = Self::parse(&content)?;
        debug!("文本配置文件加载完成");
        Ok(config)
    }

    fn name(&self) -> &str {
        "text"
    }

    fn source_path(&self) -> Option<&Path> {
        Some(&self.file_path)
    }
}

/// TOML 文件中的装配配置，字段缺失在解析后按格式错误处理
#[derive(Debug, Deserialize)]
struct RawComponentConfig {
    provider: Option<String>,
    service: Option<String>,
}

/// TOML 配置提供者
///
/// ```toml
/// provider = "default-provider"
/// service = "default-service"
/// ```
#[derive(Debug, Clone)]
pub struct TomlConfigProvider {
    file_path: PathBuf,
}

impl TomlConfigProvider {
    /// 创建指向 TOML 文件的配置提供者
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            file_path: path.as_ref().to_path_buf(),
        }
    }

    /// 从 TOML 内容解析装配配置
    pub fn parse(content: &str) -> ConfigResult<ComponentConfig> {
        let raw: RawComponentConfig = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            source: Box::new(e),
        })?;

        let provider = raw
            .provider
            .ok_or_else(|| ConfigError::format("provider", "需要数据提供者标识符"))?;
        let service = raw
            .service
            .ok_or_else(|| ConfigError::format("service", "需要业务服务标识符"))?;

        let config = ComponentConfig::new(provider, service);
        config.validate()?;
        Ok(config)
    }
}

impl ConfigProvider for TomlConfigProvider {
    fn load(&self) -> ConfigResult<ComponentConfig> {
        debug!("加载 TOML 配置文件: {}", self.file_path.display());
        let content = read_config_file(&self.file_path)?;
        let config = Self::parse(&content)?;
        debug!("TOML 配置文件加载完成");
        Ok(config)
    }

    fn name(&self) -> &str {
        "toml"
    }

    fn source_path(&self) -> Option<&Path> {
        Some(&self.file_path)
    }
}

/// 按扩展名选择配置提供者：`.toml` 使用 TOML，其余均按两行文本处理
pub fn provider_for_path<P: AsRef<Path>>(path: P) -> Box<dyn ConfigProvider> {
    let path = path.as_ref();
    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    if is_toml {
        info!("使用 TOML 配置文件: {}", path.display());
        Box::new(TomlConfigProvider::new(path))
    } else {
        info!("使用文本配置文件: {}", path.display());
        Box::new(TextConfigProvider::new(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_parse_two_lines() {
        let config = TextConfigProvider::parse("default-provider\ndefault-service\n").unwrap();
        assert_eq!(config, ComponentConfig::new("default-provider", "default-service"));
    }

    #[test]
    fn test_text_parse_crlf_and_extra_lines() {
        let config =
            TextConfigProvider::parse("default-provider\r\ndefault-service\r\nignored\r\n").unwrap();
        assert_eq!(config, ComponentConfig::new("default-provider", "default-service"));
    }

    #[test]
    fn test_text_parse_keeps_whitespace() {
        let config = TextConfigProvider::parse(" default-provider\ndefault-service ").unwrap();
        assert_eq!(config.provider, " default-provider");
        assert_eq!(config.service, "default-service ");
    }

    #[test]
    fn test_text_parse_missing_second_line() {
        let err = TextConfigProvider::parse("default-provider\n").unwrap_err();
        assert!(matches!(err, ConfigError::Format { ref field, .. } if field == "line 2"));
        assert_eq!(err.kind(), "ConfigFormatError");
    }

    #[test]
    fn test_text_parse_empty_content() {
        let err = TextConfigProvider::parse("").unwrap_err();
        assert!(matches!(err, ConfigError::Format { ref field, .. } if field == "line 1"));
    }

    #[test]
    fn test_text_parse_blank_first_line() {
        let err = TextConfigProvider::parse("\ndefault-service\n").unwrap_err();
        assert!(matches!(err, ConfigError::Format { ref field, .. } if field == "line 1"));
        assert_eq!(err.to_string(), "配置格式错误: line 1: 数据提供者标识符为空");
    }

    #[test]
    fn test_toml_parse() {
        let config = TomlConfigProvider::parse(
            "provider = \"default-provider\"\nservice = \"default-service\"\n",
        )
        .unwrap();
        assert_eq!(config, ComponentConfig::new("default-provider", "default-service"));
    }

    #[test]
    fn test_toml_missing_key_is_format_error() {
        let err = TomlConfigProvider::parse("provider = \"default-provider\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Format { ref field, .. } if field == "service"));
    }

    #[test]
    fn test_toml_invalid_syntax_is_parse_error() {
        let err = TomlConfigProvider::parse("provider = ").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_provider_for_path_by_extension() {
        assert_eq!(provider_for_path("wiring.toml").name(), "toml");
        assert_eq!(provider_for_path("wiring.TOML").name(), "toml");
        assert_eq!(provider_for_path("config.txt").name(), "text");
        assert_eq!(provider_for_path("config").name(), "text");
    }
}
