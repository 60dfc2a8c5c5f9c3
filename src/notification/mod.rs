//! Report delivery.

use crate::model::Teacher;
use crate::{Injectable, module};
use async_trait::async_trait;

/// Delivers a roster report by email
///
/// A single boolean outcome: no retries, no partial-failure detail. Callers
/// decide how to record a `false`.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, teachers: &[Teacher]) -> bool;
}

/// Stand-in for a mail transport: reports what would be sent and succeeds.
#[derive(Debug, Default, Injectable)]
pub struct LoggingEmailSender;

#[async_trait]
impl EmailSender for LoggingEmailSender {
    async fn send(&self, teachers: &[Teacher]) -> bool {
        let courses: usize = teachers.iter().map(|t| t.courses.len()).sum();
        let enrollments: usize = teachers.iter().map(Teacher::enrollment_count).sum();
        tracing::info!(
            teachers = teachers.len(),
            courses,
            enrollments,
            "Roster report handed to mail transport"
        );
        true
    }
}

#[module(
    providers = [LoggingEmailSender],
    bindings = [(dyn EmailSender => LoggingEmailSender)],
)]
pub struct NotificationModule;
