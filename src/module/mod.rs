use crate::di::ContainerBuilder;

/// Trait for groups of registrations
///
/// Modules are typically defined using the `#[module]` macro, which generates
/// the registration logic from provider and binding lists.
///
/// # Example
/// ```ignore
/// use school_report::module;
///
/// #[module(
///     providers = [LoggingEmailSender],
///     bindings = [(dyn EmailSender => LoggingEmailSender)],
/// )]
/// pub struct NotificationModule;
/// ```
pub trait Module {
    /// Add this module's providers and bindings to the builder
    fn register(builder: ContainerBuilder) -> ContainerBuilder;
}
