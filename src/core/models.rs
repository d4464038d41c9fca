use chrono::{
    DateTime,
    Local,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppView {
    #[default]
    Dashboard,
    Consultant,
    Scholarships,
    DocReview,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

#[derive(Debug, Clone)]
pub struct ChatTurn {
    pub speaker: Speaker,
    pub text: String,
    pub sent_at: DateTime<Local>, // Display only, never sent upstream
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        ChatTurn { speaker: Speaker::User, text: text.into(), sent_at: Local::now() }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        ChatTurn { speaker: Speaker::Assistant, text: text.into(), sent_at: Local::now() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScholarshipFilters {
    pub country: String,     // e.g. "UK, Germany, USA"
    pub course: String,      // e.g. "MBA, CS, Arts"
    pub eligibility: String, // e.g. "80% marks, women only"
}

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub text: String,
    pub urls: Vec<String>, // Deduplicated, first-seen order
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Sop,
    Lor,
}

impl DocumentKind {
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Sop => "SOP",
            DocumentKind::Lor => "LOR",
        }
    }
}
