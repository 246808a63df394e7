//! Options for deleting an object.

/// Options for a delete request.
///
/// Carries no fields today; kept as a value object so the call shape matches
/// every other operation.
#[derive(Debug, Clone, Default)]
pub struct DeleteOpts {}

impl DeleteOpts {
    /// Creates empty delete options.
    pub fn new() -> Self {
        Self::default()
    }
}
