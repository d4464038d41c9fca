use super::models::DocumentKind;

/// A fixed scaffold the student can load into the draft editor. The
/// `[Bracketed]` markers are meant to be replaced by hand.
pub struct DocTemplate {
    pub name: &'static str,
    pub category: &'static str,
    pub content: &'static str,
}

pub struct StructuralTip {
    pub title: &'static str,
    pub content: &'static str,
}

pub fn templates_for(kind: DocumentKind) -> &'static [DocTemplate] {
    match kind {
        DocumentKind::Sop => SOP_TEMPLATES,
        DocumentKind::Lor => LOR_TEMPLATES,
    }
}

pub fn tips_for(kind: DocumentKind) -> &'static [StructuralTip] {
    match kind {
        DocumentKind::Sop => SOP_TIPS,
        DocumentKind::Lor => LOR_TIPS,
    }
}

pub const SOP_TEMPLATES: &[DocTemplate] = &[
    DocTemplate {
        name: "Computer Science (MS/PhD)",
        category: "STEM",
        content: "Statement of Purpose\n\nMy journey into the world of Computer Science began \
                  with a fascination for how logic can solve complex real-world problems. During \
                  my undergraduate studies at [University Name], I focused heavily on [Specific \
                  Field, e.g., Machine Learning], maintaining a GPA of [Your GPA].\n\nOne \
                  significant project I led involved [Describe a Project]. This experience taught \
                  me [Skill Learned]. I am now eager to pursue a Master’s at [Target University] \
                  because of its pioneering research in [Specific Lab/Professor Name]. My \
                  long-term goal is to [Your Career Goal] and contribute to the evolution of \
                  [Field].",
    },
    DocTemplate {
        name: "MBA / Management",
        category: "Business",
        content: "Statement of Purpose\n\nWith [Number] years of experience in [Industry], I \
                  have witnessed firsthand the impact of strategic decision-making on \
                  organizational growth. At [Current Company], I managed [Project/Team], \
                  achieving a [Number]% increase in efficiency. \n\nHowever, to transition into \
                  a global leadership role, I recognize the need for a rigorous business \
                  education. The MBA program at [University Name] is my top choice due to its \
                  [Specific Feature, e.g., Case Study Method]. I look forward to collaborating \
                  with a diverse cohort and leveraging my background in [Your Background] to add \
                  value to the classroom discussions.",
    },
    DocTemplate {
        name: "Public Health / Medicine",
        category: "Healthcare",
        content: "Statement of Purpose\n\nMy commitment to public health stems from observing \
                  the disparities in healthcare accessibility in [Your Region/City]. During my \
                  tenure as a [Role/Intern] at [Organization], I realized that systemic change \
                  requires [Insight]. \n\nI am applying for the [Program Name] at [University] \
                  to gain the analytical skills necessary to design equitable health policies. I \
                  am particularly drawn to your focus on [Specific Research Area], as it aligns \
                  with my passion for [Specific Goal].",
    },
    DocTemplate {
        name: "Arts & Humanities",
        category: "Creative",
        content: "Statement of Purpose\n\nArt is more than expression; it is a tool for social \
                  commentary and historical preservation. Having completed my Bachelor’s in \
                  [Subject] from [University], I have spent the last two years exploring the \
                  intersection of [Interest A] and [Interest B].\n\nYour program’s emphasis on \
                  [Unique Program Feature] provides the ideal environment for me to refine my \
                  craft. I intend to use my time at [University] to develop a thesis on [Topic], \
                  which I hope to eventually expand into [Professional Goal].",
    },
];

pub const LOR_TEMPLATES: &[DocTemplate] = &[
    DocTemplate {
        name: "Academic (Technical Professor)",
        category: "Education",
        content: "To the Admissions Committee,\n\nIt is my pleasure to recommend [Student Name] \
                  for admission to your [Degree Name] program. I have known [Student Name] for \
                  [Time] in my capacity as their professor for [Course Name] at [University]. \
                  \n\n[Student Name] consistently ranked in the top [Percentage]% of the class. \
                  What stood out most was their analytical thinking, especially during the final \
                  project where they [Specific Achievement]. They possess the academic rigor and \
                  intellectual curiosity required for graduate studies. I recommend them without \
                  reservation.",
    },
    DocTemplate {
        name: "Professional (Direct Manager)",
        category: "Corporate",
        content: "Letter of Recommendation\n\nI am writing to highly recommend [Name] for the \
                  [Program Name]. As their direct supervisor at [Company] for [Time], I have \
                  closely observed their professional growth. \n\n[Name] played a pivotal role \
                  in [Major Project]. Their ability to lead a team under pressure was \
                  exceptional. They are a dedicated professional with a keen eye for detail and \
                  a proactive approach to problem-solving. I am confident they will be a \
                  valuable asset to your institution.",
    },
    DocTemplate {
        name: "Research Supervisor LOR",
        category: "Academic",
        content: "Subject: Recommendation for [Name]\n\nI am writing to provide my strongest \
                  recommendation for [Name], who worked under my supervision as a Research \
                  Assistant for [Duration] on the project '[Project Title]'.\n\n[Name] \
                  demonstrated exceptional research acumen, particularly in [Specific \
                  Skill/Methodology]. Their contribution led to [Specific Outcome/Publication]. \
                  Their dedication to academic excellence and ability to work independently make \
                  them an ideal candidate for your research-intensive program.",
    },
];

const SOP_TIPS: &[StructuralTip] = &[
    StructuralTip {
        title: "The Hook",
        content: "Start with a specific incident or project that sparked your interest. Avoid \
                  generic 'Since childhood' openings.",
    },
    StructuralTip {
        title: "Academic Background",
        content: "Focus on technical skills and research projects. Mention GPA only if it adds \
                  significant value.",
    },
    StructuralTip {
        title: "Why this University?",
        content: "Name specific professors, labs, or courses. Connect them to your long-term \
                  career goals.",
    },
];

const LOR_TIPS: &[StructuralTip] = &[
    StructuralTip {
        title: "Context",
        content: "State the capacity in which the recommender knows you (Professor, Manager) \
                  and for how long.",
    },
    StructuralTip {
        title: "Quantifiable Impact",
        content: "Use numbers. 'Improved efficiency by 20%' or 'Top 5% of a class of 100'.",
    },
    StructuralTip {
        title: "Soft Skills",
        content: "Highlight leadership, teamwork, and resilience with specific examples.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_sizes_match_the_product() {
        assert_eq!(templates_for(DocumentKind::Sop).len(), 4);
        assert_eq!(templates_for(DocumentKind::Lor).len(), 3);
        assert_eq!(tips_for(DocumentKind::Sop).len(), 3);
        assert_eq!(tips_for(DocumentKind::Lor).len(), 3);
    }

    #[test]
    fn every_template_has_placeholders_to_fill_in() {
        for template in SOP_TEMPLATES.iter().chain(LOR_TEMPLATES.iter()) {
            assert!(
                template.content.contains('[') && template.content.contains(']'),
                "template '{}' has no bracketed placeholders",
                template.name
            );
            assert!(!template.name.is_empty());
            assert!(!template.category.is_empty());
        }
    }

    #[test]
    fn academic_lor_template_content_is_stable() {
        let template = LOR_TEMPLATES
            .iter()
            .find(|t| t.name == "Academic (Technical Professor)")
            .expect("catalog is missing the academic LOR template");

        assert_eq!(template.category, "Education");
        assert!(template.content.starts_with("To the Admissions Committee,"));
        assert!(template.content.contains("[Student Name]"));
        assert!(template.content.ends_with("I recommend them without reservation."));
    }
}
