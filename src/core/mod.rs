pub mod errors;
pub mod models;
pub mod tasks;
pub mod templates;

pub use errors::StudyWiseError;
pub use models::{
    AppView,
    ChatTurn,
    DocumentKind,
    ScholarshipFilters,
    SearchOutcome,
    Speaker,
};
