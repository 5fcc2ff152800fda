//! 解析器构建器

use crate::bootstrapper::register_default_components;
use crate::resolver::{ProviderFactory, ServiceFactory, ServiceResolver};
use infrastructure_common::{ComponentDescriptor, ComponentKind, InfrastructureError};
use tracing::{debug, info};

/// 解析器构建器
///
/// 使用建造者模式组装解析器：默认组件与自定义组件
pub struct ResolverBuilder {
    /// 是否注册默认组件
    default_components: bool,
    /// 自定义数据提供者
    providers: Vec<(ComponentDescriptor, ProviderFactory)>,
    /// 自定义业务服务
    services: Vec<(ComponentDescriptor, ServiceFactory)>,
}

impl ResolverBuilder {
    /// 创建新的解析器构建器
    pub fn new() -> Self {
        Self {
            default_components: false,
            providers: Vec::new(),
            services: Vec::new(),
        }
    }

    /// 注册默认组件
    pub fn with_default_components(mut self) -> Self {
        self.default_components = true;
        self
    }

    /// 添加数据提供者
    pub fn add_provider(mut self, name: impl Into<String>, factory: ProviderFactory) -> Self {
        let descriptor = ComponentDescriptor::new(name, ComponentKind::Provider);
        debug!("添加数据提供者: {}", descriptor.name);
        self.providers.push((descriptor, factory));
        self
    }

    /// 添加业务服务
    pub fn add_service(mut self, name: impl Into<String>, factory: ServiceFactory) -> Self {
        let descriptor = ComponentDescriptor::new(name, ComponentKind::Service);
        debug!("添加业务服务: {}", descriptor.name);
        self.services.push((descriptor, factory));
        self
    }

    /// 构建解析器
    pub fn build(self) -> Result<ServiceResolver, InfrastructureError> {
        info!("开始构建解析器");
        let mut resolver = ServiceResolver::new();

        if self.default_components {
            register_default_components(&mut resolver)?;
        }

        for (descriptor, factory) in self.providers {
            resolver.register_provider(descriptor, factory)?;
        }
        for (descriptor, factory) in self.services {
            resolver.register_service(descriptor, factory)?;
        }

        info!(
            "解析器构建完成: {} 个数据提供者, {} 个业务服务",
            resolver.providers().names().len(),
            resolver.services().names().len()
        );
        Ok(resolver)
    }
}

impl Default for ResolverBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// 初始化日志系统
///
/// 日志写入标准错误，标准输出只保留计算结果。`RUST_LOG` 优先于配置的级别。
pub fn init_logging(config: &LoggingConfig) -> Result<(), InfrastructureError> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(config.level.as_str().to_lowercase())
    });

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(config.show_target)
        .with_thread_ids(config.show_thread_ids)
        .with_file(config.show_file)
        .with_line_number(config.show_line_number);

    let result = if config.json_format {
        subscriber.json().try_init()
    } else {
        subscriber.try_init()
    };
    result.map_err(|e| InfrastructureError::BootstrapFailed {
        message: format!("日志初始化失败: {}", e),
    })?;

    debug!("日志系统初始化完成");
    Ok(())
}

/// 日志配置
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// 日志级别
    pub level: tracing::Level,
    /// 是否显示目标
    pub show_target: bool,
    /// 是否显示线程ID
    pub show_thread_ids: bool,
    /// 是否显示文件名
    pub show_file: bool,
    /// 是否显示行号
    pub show_line_number: bool,
    /// 是否使用 JSON 格式
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: tracing::Level::INFO,
            show_target: true,
            show_thread_ids: false,
            show_file: false,
            show_line_number: false,
            json_format: false,
        }
    }
}

impl LoggingConfig {
    /// 命令行使用的安静配置，只输出警告与错误
    pub fn quiet() -> Self {
        Self {
            level: tracing::Level::WARN,
            show_target: false,
            ..Self::default()
        }
    }

    /// 设置日志级别
    pub fn with_level(mut self, level: tracing::Level) -> Self {
        self.level = level;
        self
    }

    /// 设置 JSON 格式
    pub fn with_json(mut self, json_format: bool) -> Self {
        self.json_format = json_format;
        self
    }
}

/// 解析日志级别，无法识别时使用 INFO
pub fn parse_log_level(level: &str) -> tracing::Level {
    match level.to_lowercase().as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::INFO,
    }
}
