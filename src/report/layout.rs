use crate::Injectable;
use crate::model::Teacher;

/// Shapes the fetched roster before it is delivered
///
/// Implement this to sort, filter or regroup teachers for a particular report.
pub trait ReportLayout: Send + Sync {
    fn compose(&self, teachers: Vec<Teacher>) -> Vec<Teacher>;
}

/// Delivers the roster exactly as loaded.
#[derive(Debug, Default, Injectable)]
pub struct PassthroughLayout;

impl ReportLayout for PassthroughLayout {
    fn compose(&self, teachers: Vec<Teacher>) -> Vec<Teacher> {
        teachers
    }
}
