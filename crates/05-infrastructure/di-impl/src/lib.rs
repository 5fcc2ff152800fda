//! # 依赖注入具体实现
//!
//! 提供以字符串标识符为键的组件注册表实现

use di_abstractions::ComponentRegistry;
use infrastructure_common::{ComponentDescriptor, ComponentKind, DependencyError, DependencyResult};
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, info, warn};

/// 组件注册信息
struct Registration<F> {
    /// 组件描述符
    descriptor: ComponentDescriptor,
    /// 组件工厂
    factory: F,
}

/// 按名称注册的组件注册表
///
/// 注册表是普通的本地值，由组合根在启动时构建并显式传递。
pub struct NamedRegistry<F> {
    kind: ComponentKind,
    registrations: HashMap<String, Registration<F>>,
}

impl<F> NamedRegistry<F> {
    /// 创建指定类别的空注册表
    pub fn new(kind: ComponentKind) -> Self {
        Self {
            kind,
            registrations: HashMap::new(),
        }
    }

    /// 以标识符注册工厂，使用默认描述符
    pub fn register_named(&mut self, name: impl Into<String>, factory: F) -> DependencyResult<()> {
        let descriptor = ComponentDescriptor::new(name, self.kind);
        self.register(descriptor, factory)
    }

    /// 所有已注册的标识符，按字典序排列
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.registrations.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl<F> fmt::Debug for NamedRegistry<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedRegistry")
            .field("kind", &self.kind)
            .field("names", &self.names())
            .field("factory", &"<function>")
            .finish()
    }
}

impl<F> ComponentRegistry<F> for NamedRegistry<F> {
    fn kind(&self) -> ComponentKind {
        self.kind
    }

    fn register(&mut self, descriptor: ComponentDescriptor, factory: F) -> DependencyResult<()> {
        if self.registrations.contains_key(&descriptor.name) {
            warn!("组件重复注册: [{}] {}", self.kind, descriptor.name);
            return Err(DependencyError::DuplicateRegistration {
                kind: self.kind,
                name: descriptor.name,
            });
        }

        // 描述符的类别以注册表为准
        let descriptor = ComponentDescriptor {
            kind: self.kind,
            ..descriptor
        };

        info!("注册组件: {}", descriptor);
        self.registrations.insert(
            descriptor.name.clone(),
            Registration {
                descriptor,
                factory,
            },
        );
        Ok(())
    }

    fn lookup(&self, name: &str) -> DependencyResult<&F> {
        debug!("查找组件: [{}] {:?}", self.kind, name);
        self.registrations
            .get(name)
            .map(|registration| &registration.factory)
            .ok_or_else(|| DependencyError::unknown(self.kind, name))
    }

    fn is_registered(&self, name: &str) -> bool {
        self.registrations.contains_key(name)
    }

    fn get_registered_components(&self) -> Vec<ComponentDescriptor> {
        let mut descriptors: Vec<ComponentDescriptor> = self
            .registrations
            .values()
            .map(|registration| registration.descriptor.clone())
            .collect();
        descriptors.sort_by(|a, b| a.name.cmp(&b.name));
        descriptors
    }

    fn len(&self) -> usize {
        self.registrations.len()
    }

    fn clear(&mut self) {
        info!("清理注册表: {} 个 {} 组件", self.registrations.len(), self.kind);
        self.registrations.clear();
    }
}
