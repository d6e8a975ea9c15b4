/// Logging port for the business layer. Infrastructure supplies the
/// implementation so handlers stay free of any logging backend.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
