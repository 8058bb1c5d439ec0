use serde::{Deserialize, Serialize};

/// Lifecycle state of a model instance
///
/// A degenerate fit still leaves its coefficients in place; evaluating such
/// a model propagates the non-finite values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FitStatus {
    #[default]
    Unfitted,
    Fitted,
    Degenerate,
}
