/// Store errors for the domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("store.duplicated")]
    Duplicated,
    #[error("store.poisoned")]
    Poisoned,
}
