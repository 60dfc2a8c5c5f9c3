use crate::config::DatabaseConfig;
use crate::di::{Container, ContainerBuilder};
use crate::module;
use crate::notification::NotificationModule;
use crate::report::ReportModule;
use crate::store::StoreModule;

/// Production bindings for the roster report
///
/// Expects a [`DatabaseConfig`] to be registered alongside it.
#[module(imports = [StoreModule, NotificationModule, ReportModule])]
pub struct AppModule;

/// The composition root: everything the entry point resolves comes from here.
pub fn build_container(database: DatabaseConfig) -> Container {
    ContainerBuilder::new()
        .register(database)
        .install::<AppModule>()
        .build()
}
