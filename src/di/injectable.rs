use crate::di::Container;
use crate::error::Result;

/// Trait for types that can be built from the DI container
///
/// This trait is typically implemented via `#[derive(Injectable)]`, which resolves
/// every `Arc<T>` / `Arc<dyn Trait>` field from the container.
///
/// # Example
/// ```ignore
/// use school_report::Injectable;
/// use std::sync::Arc;
///
/// #[derive(Injectable)]
/// pub struct TeacherReportGenerator {
///     repository: Arc<dyn TeacherRepository>,
///     sender: Arc<dyn EmailSender>,
/// }
/// ```
pub trait Injectable: Sized + Send + Sync + 'static {
    /// Create an instance by resolving dependencies from the container
    ///
    /// # Errors
    /// Returns an error if any required dependency is not registered.
    fn inject(container: &Container) -> Result<Self>;
}
