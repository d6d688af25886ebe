/// Errors raised by the managed collaborators (document store, identity provider).
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("store.unavailable")]
    Unavailable,
    #[error("store.permission_denied")]
    PermissionDenied,
    #[error("store.rejected")]
    Rejected,
}

