pub mod app;
pub mod consultant;
pub mod dashboard;
pub mod doc_review;
pub mod error_modal;
pub mod nav;
pub mod scholarships;
pub mod settings;
pub mod setup_banner;
pub mod theme;

pub use app::StudyWiseApp;
