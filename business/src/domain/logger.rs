/// Logging port used by every use case.
///
/// The business crate never talks to a logging backend directly; the
/// infrastructure layer provides the implementation.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
