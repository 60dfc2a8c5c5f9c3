use proc_macro::TokenStream;

mod injectable;
mod module;

/// Derive macro for building a struct from the DI container
///
/// Every field must be an `Arc<T>` or an `Arc<dyn Trait>`. Concrete types are
/// resolved with `Container::resolve`, trait objects with
/// `Container::resolve_trait`.
///
/// # Example
/// ```ignore
/// use school_report::Injectable;
///
/// #[derive(Injectable)]
/// pub struct TeacherReportGenerator {
///     repository: Arc<dyn TeacherRepository>,
///     sender: Arc<dyn EmailSender>,
/// }
/// ```
#[proc_macro_derive(Injectable)]
pub fn derive_injectable(input: TokenStream) -> TokenStream {
    injectable::derive_injectable(input)
}

/// Attribute macro declaring a module of providers and trait bindings
///
/// # Example
/// ```ignore
/// use school_report::module;
///
/// #[module(
///     providers = [LoggingEmailSender, TeacherReportGenerator],
///     transients = [PassthroughLayout],
///     bindings = [
///         (dyn EmailSender => LoggingEmailSender),
///         (dyn ReportLayout => PassthroughLayout),
///     ],
/// )]
/// pub struct AppModule;
/// ```
#[proc_macro_attribute]
pub fn module(attr: TokenStream, item: TokenStream) -> TokenStream {
    module::module_attribute(attr, item)
}
