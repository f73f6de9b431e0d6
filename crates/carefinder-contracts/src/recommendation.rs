//! Care pathway recommendations and the fixed advisory text shown with them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Shown under every recommendation.
pub const SAFETY_NET: &str =
    "If you're unsure, you can call NHS 111 for advice or visit 111.nhs.uk.";

/// Shown at the foot of every page.
pub const DISCLAIMER: &str = "This site provides general guidance only and is not a medical \
    diagnosis. If symptoms are severe or life-threatening, call 999 or go to A&E. For \
    non-emergency advice, contact NHS 111.";

/// Where the user should go for care.
///
/// Variants are declared from most to least urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Recommendation {
    /// A&E, or 999 if life-threatening.
    EmergencyCare,
    /// Book an appointment with the GP surgery.
    GpAppointment,
    /// A local pharmacist can help.
    Pharmacy,
}

impl Recommendation {
    pub const ALL: [Recommendation; 3] = [
        Recommendation::EmergencyCare,
        Recommendation::GpAppointment,
        Recommendation::Pharmacy,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Recommendation::EmergencyCare => "emergency-care",
            Recommendation::GpAppointment => "gp-appointment",
            Recommendation::Pharmacy => "pharmacy",
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            Recommendation::EmergencyCare => "Go to A&E immediately.",
            Recommendation::GpAppointment => "Book a GP appointment.",
            Recommendation::Pharmacy => "Visit your local pharmacy.",
        }
    }

    pub fn advice(self) -> &'static str {
        match self {
            Recommendation::EmergencyCare => {
                "Your symptoms may indicate a medical emergency. If it is life-threatening, \
                 please call 999."
            }
            Recommendation::GpAppointment => {
                "Your symptoms are persistent or severe and should be checked by a doctor. \
                 Contact your GP surgery to make an appointment."
            }
            Recommendation::Pharmacy => {
                "A pharmacist can offer clinical advice and over-the-counter medicines for a \
                 range of minor illnesses."
            }
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
