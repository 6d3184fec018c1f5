// Domain modules
pub mod category;
pub mod draft;
pub mod error;
pub mod rating;
pub mod session;
pub mod sink;

pub use category::{CategoryDefinition, CategoryKey, CATEGORIES};
pub use draft::{CategoryResponse, EvaluationDraft, FieldUpdate, RequiredField};
pub use error::{EvalFormError, Result};
pub use rating::{Rating, RatingStyle};
pub use session::{EvaluationSession, FormPhase};
pub use sink::{LogSink, SubmissionSink};
