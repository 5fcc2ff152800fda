//! 错误类型定义

use crate::component::ComponentKind;
use thiserror::Error;

/// 装箱的底层错误
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件不存在: {path}")]
    FileNotFound { path: String },

    #[error("配置文件读取失败: {source}")]
    FileReadError {
        #[from]
        source: std::io::Error,
    },

    #[error("配置格式错误: {field}: {message}")]
    Format { field: String, message: String },

    #[error("配置解析失败: {source}")]
    ParseError { source: BoxError },
}

impl ConfigError {
    /// 创建格式错误
    pub fn format(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Format {
            field: field.into(),
            message: message.into(),
        }
    }

    /// 错误类别名称
    pub fn kind(&self) -> &'static str {
        match self {
            Self::FileNotFound { .. } => "FileNotFound",
            Self::FileReadError { .. } => "FileReadError",
            Self::Format { .. } => "ConfigFormatError",
            Self::ParseError { .. } => "ConfigParseError",
        }
    }
}

/// 依赖注入错误类型
#[derive(Error, Debug)]
pub enum DependencyError {
    #[error("组件未注册: [{kind}] {name}")]
    UnknownComponent { kind: ComponentKind, name: String },

    #[error("组件创建失败: [{kind}] {name}, 原因: {source}")]
    ConstructionFailed {
        kind: ComponentKind,
        name: String,
        source: BoxError,
    },

    #[error("组件重复注册: [{kind}] {name}")]
    DuplicateRegistration { kind: ComponentKind, name: String },
}

impl DependencyError {
    /// 创建未注册错误
    pub fn unknown(kind: ComponentKind, name: impl Into<String>) -> Self {
        Self::UnknownComponent {
            kind,
            name: name.into(),
        }
    }

    /// 创建构建失败错误
    pub fn construction_failed(
        kind: ComponentKind,
        name: impl Into<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        Self::ConstructionFailed {
            kind,
            name: name.into(),
            source: source.into(),
        }
    }

    /// 错误类别名称
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnknownComponent { .. } => "UnknownComponentError",
            Self::ConstructionFailed { .. } => "ConstructionError",
            Self::DuplicateRegistration { .. } => "DuplicateRegistrationError",
        }
    }
}

/// 基础设施错误类型
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("配置错误: {source}")]
    ConfigError {
        #[from]
        source: ConfigError,
    },

    #[error("依赖注入错误: {source}")]
    DependencyError {
        #[from]
        source: DependencyError,
    },

    #[error("基础设施启动失败: {message}")]
    BootstrapFailed { message: String },
}

impl InfrastructureError {
    /// 错误类别名称，保留底层错误的类别
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ConfigError { source } => source.kind(),
            Self::DependencyError { source } => source.kind(),
            Self::BootstrapFailed { .. } => "BootstrapError",
        }
    }
}

/// 结果类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
pub type DependencyResult<T> = Result<T, DependencyError>;
pub type InfrastructureResult<T> = Result<T, InfrastructureError>;
