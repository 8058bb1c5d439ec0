use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification callers use to decide which offsets a model can evaluate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelFamily {
    /// Closed-form curve in time, valid at any offset
    Direct,
    /// Recursive model, defined only from the last observation forward
    Autoregressive,
}

impl fmt::Display for ModelFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelFamily::Direct => write!(f, "direct"),
            ModelFamily::Autoregressive => write!(f, "autoregressive"),
        }
    }
}
