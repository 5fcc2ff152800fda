//! 运行器
//!
//! 读取装配配置、解析组件、调用计算并输出结果。
//! 运行器是唯一捕获错误并将其转换为用户消息与退出状态的层。

use crate::bootstrapper::{wire_static, wire_with_setter};
use crate::builder::ResolverBuilder;
use crate::resolver::ServiceResolver;
use config_abstractions::{ComponentConfig, ConfigProvider};
use di_abstractions::ComponentResolver;
use infrastructure_common::{InfrastructureError, InfrastructureResult};
use std::io::Write;
use tracing::{error, info};

/// 运行结果状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// 成功，退出码 0
    Success,
    /// 解析或计算失败，退出码 1
    Failure,
}

impl RunStatus {
    /// 进程退出码
    pub fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Failure => 1,
        }
    }

    /// 是否成功
    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}

/// 运行器
#[derive(Debug)]
pub struct Runner {
    resolver: ServiceResolver,
}

impl Runner {
    /// 使用给定的解析器创建运行器
    pub fn new(resolver: ServiceResolver) -> Self {
        Self { resolver }
    }

    /// 使用默认组件创建运行器
    pub fn with_defaults() -> InfrastructureResult<Self> {
        let resolver = ResolverBuilder::new().with_default_components().build()?;
        Ok(Self::new(resolver))
    }

    /// 读取配置并完成一次解析与计算
    pub fn execute(&self, config: &dyn ConfigProvider) -> InfrastructureResult<f64> {
        info!("读取装配配置: {}", config.name());
        let ComponentConfig { provider, service } = config.load()?;
        info!("数据提供者: {}", provider);
        info!("业务服务: {}", service);

        let instance = self.resolver.resolve(&provider, &service)?;
        let value = instance.compute();
        info!("计算结果: {}", value);
        Ok(value)
    }

    /// 执行并输出结果，失败时输出错误消息
    pub fn run<W: Write>(&self, config: &dyn ConfigProvider, out: &mut W) -> RunStatus {
        report(self.execute(config), out)
    }

    /// 输出所有已注册组件
    pub fn list_components<W: Write>(&self, out: &mut W, json: bool) -> RunStatus {
        let components = self.resolver.get_registered_components();

        let written = if json {
            serde_json::to_string_pretty(&components)
                .map_err(std::io::Error::from)
                .and_then(|text| writeln!(out, "{}", text))
        } else {
            components
                .iter()
                .try_for_each(|component| writeln!(out, "{}", component))
        };

        match written {
            Ok(()) => RunStatus::Success,
            Err(e) => {
                error!("输出组件列表失败: {}", e);
                RunStatus::Failure
            }
        }
    }
}

/// 通过构造函数手工装配并输出结果
pub fn run_static<W: Write>(out: &mut W) -> RunStatus {
    info!("使用构造函数装配");
    report(Ok(wire_static().compute()), out)
}

/// 通过设值方式手工装配并输出结果
pub fn run_setter<W: Write>(out: &mut W) -> RunStatus {
    info!("使用设值方式装配");
    let result = wire_with_setter()
        .map(|service| service.compute())
        .map_err(InfrastructureError::from);
    report(result, out)
}

/// 将计算结果或错误写入输出
///
/// 错误消息包含错误类别，不会输出数值结果。
pub fn report<W: Write>(result: InfrastructureResult<f64>, out: &mut W) -> RunStatus {
    match result {
        Ok(value) => match writeln!(out, "{}", value) {
            Ok(()) => RunStatus::Success,
            Err(e) => {
                error!("输出结果失败: {}", e);
                RunStatus::Failure
            }
        },
        Err(e) => {
            error!(kind = e.kind(), "运行失败: {}", e);
            if let Err(write_error) = writeln!(out, "错误 [{}]: {}", e.kind(), e) {
                error!("输出错误消息失败: {}", write_error);
            }
            RunStatus::Failure
        }
    }
}
