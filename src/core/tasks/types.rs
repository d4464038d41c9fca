use crate::core::models::SearchOutcome;

/// Completed background work, delivered to the UI thread over the
/// task channel. Errors arrive pre-rendered so the payload stays Send.
#[derive(Debug, Clone)]
pub enum TaskResult {
    ConsultantReply(Result<String, String>),
    ScholarshipResults(Result<SearchOutcome, String>),
    DocumentFeedback(Result<String, String>),
}
