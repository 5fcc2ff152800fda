//! 组件注册表抽象接口

use infrastructure_common::{ComponentDescriptor, ComponentKind, DependencyResult};

/// 组件注册表 trait
///
/// 将字符串标识符映射到工厂 `F`。标识符精确匹配，区分大小写且不做裁剪。
pub trait ComponentRegistry<F> {
    /// 注册表所管理的组件类别
    fn kind(&self) -> ComponentKind;

    /// 注册组件工厂，标识符已存在时失败
    fn register(&mut self, descriptor: ComponentDescriptor, factory: F) -> DependencyResult<()>;

    /// 按标识符查找工厂，不存在时返回未注册错误
    fn lookup(&self, name: &str) -> DependencyResult<&F>;

    /// 检查组件是否已注册
    fn is_registered(&self, name: &str) -> bool;

    /// 获取所有已注册的组件描述符，按标识符排序
    fn get_registered_components(&self) -> Vec<ComponentDescriptor>;

    /// 已注册组件数量
    fn len(&self) -> usize;

    /// 注册表是否为空
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 清理已注册的组件
    fn clear(&mut self);
}
