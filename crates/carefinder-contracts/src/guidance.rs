//! Static page copy: the home page introduction and the service guide.
//!
//! Front ends render these verbatim; nothing here depends on user input.

use crate::recommendation::Recommendation;

pub const HOME_TITLE: &str = "Get the Right Care, Right Away";

pub const HOME_INTRO: &str = "A&E wait times are long. This is partly due to many people making \
    trips to the A&E when this is not needed. To help combat this issue, this tool has been \
    created to help you decide if you need to go to A&E, book a GP appointment, or visit a local \
    pharmacy, ensuring you get the appropriate care and help reduce pressure on the NHS.";

pub const GUIDANCE_TITLE: &str = "Choosing the Right NHS Service";

pub const GUIDANCE_INTRO: &str =
    "Understanding where to go for medical help can be confusing. Here's a simple guide.";

pub const QUESTIONNAIRE_TITLE: &str = "Symptom Questionnaire";

pub const QUESTIONNAIRE_INTRO: &str =
    "Answer a few questions to get guidance on where to seek help. This is not a diagnosis.";

/// One block of the service guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuidanceSection {
    pub title: &'static str,
    pub summary: &'static str,
    pub items: &'static [&'static str],
    /// The pathway this section describes. `None` for the "still unsure" block.
    pub pathway: Option<Recommendation>,
}

/// The service guide, from most to least urgent.
pub static GUIDANCE: [GuidanceSection; 4] = [
    GuidanceSection {
        title: "When to go to A&E (or call 999)",
        summary: "A&E is for serious injuries and life-threatening emergencies only.",
        items: &[
            "Loss of consciousness or signs of a stroke (FAST)",
            "Severe chest pain or difficulty breathing",
            "Heavy bleeding that won't stop",
            "Severe burns, allergic reactions, or seizures",
        ],
        pathway: Some(Recommendation::EmergencyCare),
    },
    GuidanceSection {
        title: "When to book a GP appointment",
        summary: "Your GP is your main point of contact for ongoing health issues and \
                  non-emergency illnesses.",
        items: &[
            "Symptoms that are persistent, severe, or affecting your daily life",
            "Mental health concerns like anxiety or depression",
            "Managing long-term conditions like asthma or diabetes",
        ],
        pathway: Some(Recommendation::GpAppointment),
    },
    GuidanceSection {
        title: "When a Pharmacy is enough",
        summary: "Pharmacists are trained medical professionals who can provide advice and \
                  over-the-counter medicines for minor illnesses.",
        items: &[
            "Coughs, colds, and sore throats",
            "Minor rashes or skin conditions",
            "Aches, pains, and upset stomachs",
            "Questions about your medication",
        ],
        pathway: Some(Recommendation::Pharmacy),
    },
    GuidanceSection {
        title: "If you're still unsure...",
        summary: "If it's not a 999 emergency but you need medical help fast, you can contact \
                  NHS 111 online or by phone. They are available 24/7.",
        items: &[],
        pathway: None,
    },
];

/// Look up the guide section for a pathway.
pub fn section_for(recommendation: Recommendation) -> Option<&'static GuidanceSection> {
    GUIDANCE.iter().find(|s| s.pathway == Some(recommendation))
}
