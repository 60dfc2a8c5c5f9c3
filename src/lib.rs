//! # school-report
//!
//! A teacher roster report wired together through a small dependency injection
//! container.
//!
//! The report loads every teacher with their courses and enrolled students in
//! one query, passes the roster through a layout step, and hands it to an email
//! sender. Each collaborator is a trait resolved from the container, so tests
//! swap in stubs without touching the report code.
//!
//! ## Features
//!
//! - **Two-phase container**: [`ContainerBuilder`] accepts registrations,
//!   [`Container`] resolves them. Resolving before building, or registering
//!   after, does not compile.
//! - **Lifetimes**: singleton and transient factories, plus ready-made instances
//! - **Trait Object Support**: resolve `Arc<dyn Trait>` through explicit bindings
//! - **Typed failures**: unregistered capabilities, cycles, data access and
//!   delivery failures are all [`ReportError`] variants
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use school_report::prelude::*;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = ConfigService::from_env();
//! let container = build_container(DatabaseConfig::from_config(&config)?);
//!
//! let generator = container.resolve_trait::<dyn ReportGenerator>()?;
//! let summary = generator.generate().await?;
//! println!("sent {} teachers", summary.teachers);
//! # Ok(())
//! # }
//! ```

// Lets the derive and module macros name `::school_report` from inside this crate
extern crate self as school_report;

pub mod app_module;
pub mod config;
pub mod di;
pub mod error;
pub mod model;
pub mod module;
pub mod notification;
pub mod report;
pub mod store;
pub mod telemetry;

// Re-export core types
pub use di::{Container, ContainerBuilder, Injectable, Lifetime};
pub use error::{ReportError, Result};
pub use module::Module;

// Re-export macros
pub use school_report_macro::{Injectable, module};

/// Prelude module for convenient imports
///
/// ```
/// use school_report::prelude::*;
/// ```
pub mod prelude {
    pub use crate::app_module::{AppModule, build_container};
    pub use crate::config::{ConfigService, DatabaseConfig};
    pub use crate::di::{Container, ContainerBuilder, Lifetime};
    pub use crate::error::{ReportError, Result};
    pub use crate::model::{Course, Student, Teacher};
    pub use crate::module::Module;
    pub use crate::notification::{EmailSender, LoggingEmailSender, NotificationModule};
    pub use crate::report::{
        FailureRecorder, PassthroughLayout, ReportGenerator, ReportLayout, ReportModule,
        ReportSummary, TeacherReportGenerator, TracingFailureRecorder,
    };
    pub use crate::store::{SeaOrmTeacherRepository, StoreModule, TeacherRepository};
    pub use crate::{Injectable, module};
    pub use async_trait::async_trait;
    pub use std::sync::Arc;
}
