//! 组件描述信息
//!
//! 注册表中的每个条目都以字符串标识符命名，并归属于一个组件类别

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// 组件类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    /// 数据提供者（无参构造）
    Provider,
    /// 业务服务（以数据提供者为唯一构造参数）
    Service,
}

impl ComponentKind {
    /// 类别名称
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Provider => "provider",
            Self::Service => "service",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 组件描述符
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    /// 组件标识符，精确匹配（区分大小写，不做裁剪）
    pub name: String,
    /// 组件类别
    pub kind: ComponentKind,
    /// 实现类型名称
    pub type_name: String,
    /// 组件元数据
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
}

impl ComponentDescriptor {
    /// 创建新的组件描述符
    pub fn new(name: impl Into<String>, kind: ComponentKind) -> Self {
        Self {
            name: name.into(),
            kind,
            type_name: String::new(),
            metadata: HashMap::new(),
        }
    }

    /// 设置实现类型名称
    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = type_name.into();
        self
    }

    /// 使用 `T` 的类型名称
    pub fn with_type<T: ?Sized>(self) -> Self {
        self.with_type_name(std::any::type_name::<T>())
    }

    /// 添加元数据
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for ComponentDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.type_name.is_empty() {
            write!(f, "[{}] {}", self.kind, self.name)
        } else {
            write!(f, "[{}] {} -> {}", self.kind, self.name, self.type_name)
        }
    }
}
