//! 配置驱动装配的集成测试

use crate::bootstrapper::{default_resolver, DEFAULT_PROVIDER, DEFAULT_SERVICE};
use crate::resolver::ServiceResolver;
use crate::runner::{RunStatus, Runner};
use config_impl::{provider_for_path, TextConfigProvider};
use di_abstractions::{nullary, ComponentResolver};
use domain::{BusinessService, DataProvider};
use infrastructure_common::{
    BoxError, ComponentDescriptor, ComponentKind, DependencyError, InfrastructureError,
};
use std::sync::Arc;
use tempfile::{tempdir, NamedTempFile};

fn write_config(content: &str) -> NamedTempFile {
    let file = NamedTempFile::new().unwrap();
    std::fs::write(file.path(), content).unwrap();
    file
}

fn run_with(content: &str) -> (RunStatus, String) {
    let file = write_config(content);
    let runner = Runner::with_defaults().unwrap();
    let mut out = Vec::new();
    let status = runner.run(&TextConfigProvider::new(file.path()), &mut out);
    (status, String::from_utf8(out).unwrap())
}

/// 测试默认标识符解析得到 60
#[test]
fn test_default_identifiers_compute_sixty() {
    let resolver = default_resolver().unwrap();
    let service = resolver.resolve(DEFAULT_PROVIDER, DEFAULT_SERVICE).unwrap();
    assert_eq!(service.compute(), 60.0);
}

/// 测试未注册的标识符返回类型化错误
#[test]
fn test_unknown_provider_is_typed_error() {
    let resolver = default_resolver().unwrap();
    let err = resolver.resolve("nonexistent", DEFAULT_SERVICE).unwrap_err();
    assert!(matches!(
        err,
        DependencyError::UnknownComponent { kind: ComponentKind::Provider, ref name } if name == "nonexistent"
    ));
}

/// 测试标识符区分大小写且不裁剪
#[test]
fn test_identifiers_match_exactly() {
    let resolver = default_resolver().unwrap();
    for (provider, service) in [
        ("Default-Provider", DEFAULT_SERVICE),
        (" default-provider", DEFAULT_SERVICE),
        (DEFAULT_PROVIDER, "default-service "),
    ] {
        let err = resolver.resolve(provider, service).unwrap_err();
        assert!(matches!(err, DependencyError::UnknownComponent { .. }));
    }
}

/// 测试重复解析得到彼此独立、行为一致的实例
#[test]
fn test_resolve_is_idempotent() {
    let resolver = default_resolver().unwrap();
    let first = resolver.resolve(DEFAULT_PROVIDER, DEFAULT_SERVICE).unwrap();
    let second = resolver.resolve(DEFAULT_PROVIDER, DEFAULT_SERVICE).unwrap();

    assert_eq!(first.compute(), second.compute());
    let first_ptr = &*first as *const dyn BusinessService as *const u8;
    let second_ptr = &*second as *const dyn BusinessService as *const u8;
    assert_ne!(first_ptr, second_ptr);
}

/// 测试每次解析都会重新构建数据提供者
#[test]
fn test_each_resolve_constructs_new_provider() {
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug)]
    struct Counted;

    impl DataProvider for Counted {
        fn fetch_value(&self) -> f64 {
            1.0
        }
    }

    let constructed = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&constructed);

    let mut resolver = default_resolver().unwrap();
    resolver
        .register_provider(
            ComponentDescriptor::new("counted", ComponentKind::Provider),
            nullary(move || {
                counter.fetch_add(1, Ordering::SeqCst);
                Arc::new(Counted) as Arc<dyn DataProvider>
            }),
        )
        .unwrap();

    let first = resolver.resolve("counted", DEFAULT_SERVICE).unwrap();
    let second = resolver.resolve("counted", DEFAULT_SERVICE).unwrap();

    assert_eq!(constructed.load(Ordering::SeqCst), 2);
    assert_eq!(first.compute(), 3.0);
    assert_eq!(second.compute(), 3.0);
}

/// 测试工厂失败转换为构建错误
#[test]
fn test_failing_factory_is_construction_error() {
    let mut resolver = ServiceResolver::new();
    resolver
        .register_provider(
            ComponentDescriptor::new("broken-provider", ComponentKind::Provider),
            Box::new(|| Err::<Arc<dyn DataProvider>, BoxError>("数据源不可用".into())),
        )
        .unwrap();

    let err = resolver.resolve("broken-provider", DEFAULT_SERVICE).unwrap_err();
    assert!(matches!(
        err,
        DependencyError::ConstructionFailed { kind: ComponentKind::Provider, ref name, .. } if name == "broken-provider"
    ));
    assert_eq!(err.kind(), "ConstructionError");
}

/// 测试业务服务工厂失败转换为构建错误
#[test]
fn test_failing_service_factory_is_construction_error() {
    let mut resolver = default_resolver().unwrap();
    resolver
        .register_service(
            ComponentDescriptor::new("broken-service", ComponentKind::Service),
            Box::new(|_provider: Arc<dyn DataProvider>| {
                Err::<Box<dyn BusinessService>, BoxError>("服务依赖不可用".into())
            }),
        )
        .unwrap();

    let err = resolver.resolve(DEFAULT_PROVIDER, "broken-service").unwrap_err();
    assert!(matches!(
        err,
        DependencyError::ConstructionFailed { kind: ComponentKind::Service, ref name, .. } if name == "broken-service"
    ));
    assert_eq!(err.kind(), "ConstructionError");
    let source = std::error::Error::source(&err).map(ToString::to_string);
    assert_eq!(source.as_deref(), Some("服务依赖不可用"));
}

/// 测试完整的两行配置文件
#[test]
fn test_runner_with_config_file() {
    let (status, out) = run_with("default-provider\ndefault-service\n");
    assert_eq!(status, RunStatus::Success);
    assert_eq!(status.code(), 0);
    assert_eq!(out, "60\n");
}

/// 测试只有一行的配置文件
#[test]
fn test_runner_single_line_config_fails() {
    let (status, out) = run_with("default-provider\n");
    assert_eq!(status, RunStatus::Failure);
    assert_ne!(status.code(), 0);
    assert!(out.contains("ConfigFormatError"));
    assert!(!out.contains("60"));
}

/// 测试配置中的未知组件
#[test]
fn test_runner_unknown_component_fails() {
    let (status, out) = run_with("nonexistent\ndefault-service\n");
    assert_eq!(status, RunStatus::Failure);
    assert!(out.starts_with("错误 [UnknownComponentError]"));
}

/// 测试配置文件不存在
#[test]
fn test_runner_missing_config_file() {
    let dir = tempdir().unwrap();
    let runner = Runner::with_defaults().unwrap();

    let err = runner
        .execute(&TextConfigProvider::new(dir.path().join("config.txt")))
        .unwrap_err();
    assert!(matches!(err, InfrastructureError::ConfigError { .. }));
    assert_eq!(err.kind(), "FileNotFound");
}

/// 测试 TOML 配置文件
#[test]
fn test_runner_with_toml_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("wiring.toml");
    std::fs::write(
        &path,
        "provider = \"default-provider\"\nservice = \"default-service\"\n",
    )
    .unwrap();

    let runner = Runner::with_defaults().unwrap();
    let provider = provider_for_path(&path);
    assert_eq!(runner.execute(provider.as_ref()).unwrap(), 60.0);
}
