//! Model module containing fit outcome types

mod fit_score;
mod fit_status;
mod model_family;

pub use fit_score::FitScore;
pub use fit_status::FitStatus;
pub use model_family::ModelFamily;
