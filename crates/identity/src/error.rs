use thiserror::Error;

/// Errors that can occur while constructing identity inputs.
///
/// Lookup never errors: an unknown kind degrades to the wildcard uid, so
/// the only failures here are caller contract violations caught at
/// construction time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentityError {
    #[error("ingredient kind requires a non-empty name")]
    EmptyKindName,
}
