//! The roster report workflow: fetch, lay out, deliver, record failure.

mod generator;
mod layout;
mod recorder;

pub use generator::{ReportGenerator, ReportSummary, TeacherReportGenerator};
pub use layout::{PassthroughLayout, ReportLayout};
pub use recorder::{FailureRecorder, TracingFailureRecorder};

use crate::module;

/// The report generator and its in-process collaborators.
///
/// Resolving [`ReportGenerator`] also needs a `TeacherRepository` and an
/// `EmailSender` from other modules.
#[module(
    providers = [TracingFailureRecorder, TeacherReportGenerator],
    transients = [PassthroughLayout],
    bindings = [
        (dyn ReportLayout => PassthroughLayout),
        (dyn FailureRecorder => TracingFailureRecorder),
        (dyn ReportGenerator => TeacherReportGenerator),
    ],
)]
pub struct ReportModule;
