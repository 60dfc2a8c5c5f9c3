use school_report::prelude::*;

fn config() -> DatabaseConfig {
    DatabaseConfig::new("postgres://report@localhost/school")
}

fn data_ptr<T: ?Sized>(value: &Arc<T>) -> *const () {
    Arc::as_ptr(value) as *const ()
}

#[test]
fn test_resolves_every_capability() {
    let container = build_container(config());

    assert!(container.resolve_trait::<dyn TeacherRepository>().is_ok());
    assert!(container.resolve_trait::<dyn ReportLayout>().is_ok());
    assert!(container.resolve_trait::<dyn EmailSender>().is_ok());
    assert!(container.resolve_trait::<dyn FailureRecorder>().is_ok());
    assert!(container.resolve_trait::<dyn ReportGenerator>().is_ok());
    assert!(container.resolve::<DatabaseConfig>().is_ok());
}

#[test]
fn test_singletons_are_shared() {
    let container = build_container(config());

    let first = container.resolve_trait::<dyn ReportGenerator>().unwrap();
    let second = container.resolve_trait::<dyn ReportGenerator>().unwrap();
    assert_eq!(data_ptr(&first), data_ptr(&second));

    let concrete = container.resolve::<TeacherReportGenerator>().unwrap();
    assert_eq!(data_ptr(&first), data_ptr(&concrete));
}

#[test]
fn test_transient_layout_is_rebuilt() {
    let container = build_container(config());

    let first = container.resolve_trait::<dyn ReportLayout>().unwrap();
    let second = container.resolve_trait::<dyn ReportLayout>().unwrap();
    assert_ne!(data_ptr(&first), data_ptr(&second));
}

#[test]
fn test_missing_configuration_is_reported() {
    let container = AppModule::create_container();

    match container.resolve_trait::<dyn ReportGenerator>() {
        Err(ReportError::CapabilityNotRegistered { type_name }) => {
            assert!(type_name.ends_with("DatabaseConfig"), "{type_name}");
        }
        Err(other) => panic!("expected CapabilityNotRegistered, got {other}"),
        Ok(_) => panic!("resolved without a database configuration"),
    }
}

#[test]
fn test_app_module_gets_bindings_from_imports() {
    let container = AppModule::create_container();

    assert!(container.contains::<dyn TeacherRepository>());
    assert!(container.contains::<dyn EmailSender>());
    assert!(container.contains::<dyn ReportLayout>());
    assert!(container.contains::<dyn FailureRecorder>());
    assert!(container.contains::<dyn ReportGenerator>());
    assert!(container.resolve_trait::<dyn EmailSender>().is_ok());
}

#[test]
fn test_feature_modules_compose_like_app_module() {
    let container = ContainerBuilder::new()
        .register(config())
        .install::<StoreModule>()
        .install::<NotificationModule>()
        .install::<ReportModule>()
        .build();

    assert!(container.resolve_trait::<dyn ReportGenerator>().is_ok());
}

#[test]
fn test_report_module_alone_lacks_collaborators() {
    let container = ContainerBuilder::new()
        .register(config())
        .install::<ReportModule>()
        .build();

    assert!(container.resolve_trait::<dyn ReportLayout>().is_ok());
    match container.resolve_trait::<dyn ReportGenerator>() {
        Err(ReportError::CapabilityNotRegistered { type_name }) => {
            assert!(type_name.contains("TeacherRepository"), "{type_name}");
        }
        Err(other) => panic!("expected CapabilityNotRegistered, got {other}"),
        Ok(_) => panic!("resolved without a repository"),
    }
}

#[test]
fn test_never_registered_capability() {
    trait Unused: Send + Sync {}

    let container = build_container(config());

    assert!(matches!(
        container.resolve_trait::<dyn Unused>(),
        Err(ReportError::CapabilityNotRegistered { .. })
    ));
}

struct RejectsEmpty;

#[async_trait]
impl EmailSender for RejectsEmpty {
    async fn send(&self, teachers: &[Teacher]) -> bool {
        !teachers.is_empty()
    }
}

#[tokio::test]
async fn test_rebinding_resolves_new_implementation() {
    let container = ContainerBuilder::new()
        .register(config())
        .install::<AppModule>()
        .register(RejectsEmpty)
        .bind::<dyn EmailSender, RejectsEmpty, _>(|i| i as Arc<dyn EmailSender>)
        .build();

    let sender = container.resolve_trait::<dyn EmailSender>().unwrap();
    let concrete = container.resolve::<RejectsEmpty>().unwrap();

    assert_eq!(data_ptr(&sender), data_ptr(&concrete));
    assert!(!sender.send(&[]).await);
}
