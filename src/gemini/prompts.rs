use crate::core::models::{
    DocumentKind,
    ScholarshipFilters,
};

/// Standing instruction for the consultant chat. Sent with every request
/// because the upstream chat is stateless.
pub const ADVISOR_PERSONA: &str = "You are StudyWise AI, a free, expert-level study abroad \
    assistant built specifically for Indian students.\n\
    Your role is to guide students step-by-step in studying abroad.\n\
    Ask clear, minimal questions before giving recommendations.\n\
    Prioritize budget-friendly and high-ROI options (Germany, public unis, Ireland, etc.).\n\
    Structure SOP/LOR advice with line-by-line improvement.\n\
    Be strict, transparent, and accurate like a real international education expert.\n\
    If a student's goal is unrealistic (e.g. low GPA for Ivy League), explain why honestly.";

pub fn scholarship_prompt(filters: &ScholarshipFilters) -> String {
    format!(
        "Find 5 active scholarships for Indian students with these criteria:\n\
         Country: {}\n\
         Course/Field: {}\n\
         Other Criteria: {}\n\n\
         Provide the following for each in a list:\n\
         1. Name of Scholarship\n\
         2. Provider/Organization\n\
         3. Award Amount (in local currency or INR)\n\
         4. Application Deadline (if available, else 'Check website')\n\
         5. Brief eligibility summary\n\n\
         Ensure you use Google Search to find real, currently active opportunities for the \
         2024-2025 or 2025-2026 academic years.",
        or_fallback(&filters.country, "Any"),
        or_fallback(&filters.course, "Any"),
        or_fallback(&filters.eligibility, "None"),
    )
}

pub fn review_prompt(draft: &str, kind: DocumentKind) -> String {
    format!(
        "Act as an expert Admissions Officer for top global universities.\n\
         Analyze the following {} written by an Indian student.\n\n\
         Student's Draft:\n\
         \"\"\"\n\
         {}\n\
         \"\"\"\n\n\
         Please provide:\n\
         1. A structure review (Check for logical flow).\n\
         2. Line-by-line improvements for 3-5 key sections.\n\
         3. Guidance on tone (Is it too humble? Too flowery? Too formal?).\n\
         4. Specific tips for Indian students (e.g., avoid over-explaining family background, \
         focus on quantifiable achievements).\n\n\
         Provide your response in clear Markdown with headers.",
        kind.label(),
        draft,
    )
}

fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_filters_fall_back_to_any_and_none() {
        let prompt = scholarship_prompt(&ScholarshipFilters::default());

        assert!(prompt.contains("Country: Any\n"));
        assert!(prompt.contains("Course/Field: Any\n"));
        assert!(prompt.contains("Other Criteria: None\n"));
    }

    #[test]
    fn whitespace_only_filters_count_as_blank() {
        let filters = ScholarshipFilters {
            country: "   ".to_string(),
            course: String::new(),
            eligibility: "\t".to_string(),
        };

        let prompt = scholarship_prompt(&filters);

        assert!(prompt.contains("Country: Any\n"));
        assert!(prompt.contains("Other Criteria: None\n"));
    }

    #[test]
    fn provided_filters_are_embedded_verbatim() {
        let filters = ScholarshipFilters {
            country: "Germany".to_string(),
            course: "MS in CS".to_string(),
            eligibility: "80% marks".to_string(),
        };

        let prompt = scholarship_prompt(&filters);

        assert!(prompt.contains("Country: Germany\n"));
        assert!(prompt.contains("Course/Field: MS in CS\n"));
        assert!(prompt.contains("Other Criteria: 80% marks\n"));
        assert!(prompt.contains("Google Search"));
    }

    #[test]
    fn review_prompt_names_the_document_kind_and_fences_the_draft() {
        let prompt = review_prompt("My draft text.", DocumentKind::Lor);

        assert!(prompt.contains("Analyze the following LOR"));
        assert!(prompt.contains("\"\"\"\nMy draft text.\n\"\"\""));
        assert!(prompt.contains("Provide your response in clear Markdown with headers."));
    }

    #[test]
    fn persona_targets_indian_students() {
        assert!(ADVISOR_PERSONA.starts_with("You are StudyWise AI"));
        assert!(ADVISOR_PERSONA.contains("Indian students"));
        assert!(ADVISOR_PERSONA.contains("explain why honestly."));
    }
}
