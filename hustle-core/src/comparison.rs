//! Static comparison of the three common student employment models.
//!
//! Pure reference content; nothing here is computed from user input.

use serde::Serialize;

/// One employment model with its fixed advantage and risk bullets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmploymentModel {
    pub name: &'static str,
    pub advantages: &'static [&'static str],
    pub risks: &'static [&'static str],
}

/// The three employment models shown on the comparison surface, in order.
pub const EMPLOYMENT_MODELS: [EmploymentModel; 3] = [
    EmploymentModel {
        name: "Mini-Job (€520/month)",
        advantages: &[
            "Flat-rate social security (3.6%)",
            "Simple tax handling",
            "No registration required",
            "Flexible hours",
        ],
        risks: &[
            "Limited income potential",
            "No unemployment insurance",
            "May affect BAföG",
        ],
    },
    EmploymentModel {
        name: "Werkstudent (Student Worker)",
        advantages: &[
            "Full social security coverage",
            "Unemployment insurance included",
            "No hour limits for BAföG",
            "Higher earning potential",
        ],
        risks: &[
            "Must stay ≤20h/week during semester",
            "Higher employer contributions",
            "Limited to registered companies",
        ],
    },
    EmploymentModel {
        name: "Self-Employed (Freelancer/Trader)",
        advantages: &[
            "Unlimited earning potential",
            "Complete independence",
            "Tax deductions available",
            "Flexible schedule",
        ],
        risks: &[
            "No social security coverage",
            "Must pay own insurance",
            "Complex tax requirements",
            "May lose BAföG eligibility",
        ],
    },
];
