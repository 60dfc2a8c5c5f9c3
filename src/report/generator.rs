use crate::Injectable;
use crate::error::{ReportError, Result};
use crate::model::Teacher;
use crate::notification::EmailSender;
use crate::report::{FailureRecorder, ReportLayout};
use crate::store::TeacherRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Counts describing a delivered report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub teachers: usize,
    pub courses: usize,
    pub enrollments: usize,
}

impl ReportSummary {
    pub fn of(teachers: &[Teacher]) -> Self {
        Self {
            teachers: teachers.len(),
            courses: teachers.iter().map(|t| t.courses.len()).sum(),
            enrollments: teachers.iter().map(Teacher::enrollment_count).sum(),
        }
    }
}

#[async_trait]
pub trait ReportGenerator: Send + Sync {
    /// Build the roster report and deliver it
    ///
    /// # Errors
    /// `DataAccess` if the roster cannot be loaded. `DeliveryFailed` if the
    /// sender rejects the report; that failure has already been recorded.
    async fn generate(&self) -> Result<ReportSummary>;
}

#[derive(Injectable)]
pub struct TeacherReportGenerator {
    repository: Arc<dyn TeacherRepository>,
    layout: Arc<dyn ReportLayout>,
    sender: Arc<dyn EmailSender>,
    failures: Arc<dyn FailureRecorder>,
}

impl TeacherReportGenerator {
    pub fn new(
        repository: Arc<dyn TeacherRepository>,
        layout: Arc<dyn ReportLayout>,
        sender: Arc<dyn EmailSender>,
        failures: Arc<dyn FailureRecorder>,
    ) -> Self {
        Self {
            repository,
            layout,
            sender,
            failures,
        }
    }
}

#[async_trait]
impl ReportGenerator for TeacherReportGenerator {
    async fn generate(&self) -> Result<ReportSummary> {
        let teachers = self.repository.find_all_with_courses().await?;
        let teachers = self.layout.compose(teachers);
        let summary = ReportSummary::of(&teachers);

        if !self.sender.send(&teachers).await {
            let error = ReportError::DeliveryFailed {
                teachers: summary.teachers,
            };
            self.failures.record(&error);
            return Err(error);
        }

        tracing::info!(
            teachers = summary.teachers,
            courses = summary.courses,
            enrollments = summary.enrollments,
            "Report delivered"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Course, Student};
    use crate::report::PassthroughLayout;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedRoster {
        teachers: Vec<Teacher>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl TeacherRepository for FixedRoster {
        async fn find_all_with_courses(&self) -> Result<Vec<Teacher>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.teachers.clone())
        }
    }

    struct BrokenStore;

    #[async_trait]
    impl TeacherRepository for BrokenStore {
        async fn find_all_with_courses(&self) -> Result<Vec<Teacher>> {
            Err(sea_orm::DbErr::Custom("connection refused".to_string()).into())
        }
    }

    struct StubSender {
        outcome: bool,
        batches: Mutex<Vec<Vec<Teacher>>>,
    }

    impl StubSender {
        fn new(outcome: bool) -> Self {
            Self {
                outcome,
                batches: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl EmailSender for StubSender {
        async fn send(&self, teachers: &[Teacher]) -> bool {
            self.batches.lock().unwrap().push(teachers.to_vec());
            self.outcome
        }
    }

    #[derive(Default)]
    struct CollectingRecorder {
        events: Mutex<Vec<String>>,
    }

    impl FailureRecorder for CollectingRecorder {
        fn record(&self, error: &ReportError) {
            self.events.lock().unwrap().push(error.to_string());
        }
    }

    struct Reverse;

    impl ReportLayout for Reverse {
        fn compose(&self, mut teachers: Vec<Teacher>) -> Vec<Teacher> {
            teachers.reverse();
            teachers
        }
    }

    fn ada() -> Teacher {
        Teacher::new(1, "Ada").with_course(
            Course::new(10, "Algorithms", 1).with_student(Student::new(100, "Grace")),
        )
    }

    fn roster(teachers: Vec<Teacher>) -> Arc<FixedRoster> {
        Arc::new(FixedRoster {
            teachers,
            calls: AtomicUsize::new(0),
        })
    }

    #[tokio::test]
    async fn test_delivers_fetched_roster() {
        let repository = roster(vec![ada()]);
        let sender = Arc::new(StubSender::new(true));
        let recorder = Arc::new(CollectingRecorder::default());
        let generator = TeacherReportGenerator::new(
            repository.clone(),
            Arc::new(PassthroughLayout),
            sender.clone(),
            recorder.clone(),
        );

        let summary = generator.generate().await.unwrap();

        assert_eq!(
            summary,
            ReportSummary {
                teachers: 1,
                courses: 1,
                enrollments: 1
            }
        );
        assert_eq!(repository.calls.load(Ordering::SeqCst), 1);
        assert_eq!(*sender.batches.lock().unwrap(), vec![vec![ada()]]);
        assert!(recorder.events.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failed_delivery_is_recorded_once() {
        let sender = Arc::new(StubSender::new(false));
        let recorder = Arc::new(CollectingRecorder::default());
        let generator = TeacherReportGenerator::new(
            roster(vec![ada()]),
            Arc::new(PassthroughLayout),
            sender,
            recorder.clone(),
        );

        let result = generator.generate().await;

        assert!(matches!(
            result,
            Err(ReportError::DeliveryFailed { teachers: 1 })
        ));
        assert_eq!(recorder.events.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_store_failure_skips_delivery() {
        let sender = Arc::new(StubSender::new(true));
        let recorder = Arc::new(CollectingRecorder::default());
        let generator = TeacherReportGenerator::new(
            Arc::new(BrokenStore),
            Arc::new(PassthroughLayout),
            sender.clone(),
            recorder.clone(),
        );

        assert!(matches!(
            generator.generate().await,
            Err(ReportError::DataAccess(_))
        ));
        assert!(sender.batches.lock().unwrap().is_empty());
        assert!(recorder.events.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_layout_output_is_what_gets_sent() {
        let edsger = Teacher::new(2, "Edsger");
        let sender = Arc::new(StubSender::new(true));
        let generator = TeacherReportGenerator::new(
            roster(vec![ada(), edsger.clone()]),
            Arc::new(Reverse),
            sender.clone(),
            Arc::new(CollectingRecorder::default()),
        );

        generator.generate().await.unwrap();

        assert_eq!(*sender.batches.lock().unwrap(), vec![vec![edsger, ada()]]);
    }

    #[tokio::test]
    async fn test_empty_roster_is_still_sent() {
        let sender = Arc::new(StubSender::new(true));
        let generator = TeacherReportGenerator::new(
            roster(Vec::new()),
            Arc::new(PassthroughLayout),
            sender.clone(),
            Arc::new(CollectingRecorder::default()),
        );

        let summary = generator.generate().await.unwrap();

        assert_eq!(summary, ReportSummary::default());
        assert_eq!(sender.batches.lock().unwrap().len(), 1);
    }
}
