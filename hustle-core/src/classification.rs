//! Freelancer-vs-trader classification flow.
//!
//! A two-question flowchart decides whether a side activity counts as a
//! liberal profession (Freiberufler) or a trade (Gewerbe). Both answers to
//! the first question continue to the knowledge question; only the second
//! answer picks the outcome. Each outcome carries a fixed registration
//! checklist.
//!
//! # Example
//!
//! ```
//! use hustle_core::classification::{Classification, QuizFlow};
//!
//! let mut flow = QuizFlow::new();
//! flow.answer(false); // commercial-activity question
//! flow.answer(true);  // specialized-knowledge question
//!
//! assert_eq!(flow.result(), Some(Classification::Freelancer));
//! assert_eq!(flow.result().unwrap().label(), "Freiberufler (Freelancer)");
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Legal status of a self-employed side activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    /// Liberal profession; registers with the Finanzamt only.
    Freelancer,
    /// Trade; additionally registers with the Gewerbeamt.
    Trader,
}

impl Classification {
    /// Display label, German term first.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Freelancer => "Freiberufler (Freelancer)",
            Self::Trader => "Gewerbetreibender (Trader)",
        }
    }

    /// Fixed registration checklist for this outcome.
    pub fn next_steps(&self) -> &'static [&'static str] {
        match self {
            Self::Freelancer => &[
                "Register with Finanzamt (Tax Office) only",
                "Obtain Steuernummer (Tax Number)",
                "No Gewerbeamt registration needed",
                "Keep detailed records of income/expenses",
            ],
            Self::Trader => &[
                "Register with Gewerbeamt (Trade Office)",
                "Register with Finanzamt (Tax Office)",
                "Obtain Steuernummer (Tax Number)",
                "Consider business liability insurance",
            ],
        }
    }
}

/// The two questions of the flowchart, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Question {
    /// First question: is the activity commercial in nature?
    CommercialActivity,
    /// Second question: does the activity rest on specialized knowledge?
    SpecializedKnowledge,
}

impl Question {
    pub fn text(&self) -> &'static str {
        match self {
            Self::CommercialActivity => {
                "Does your activity involve buying and reselling products, \
                 manufacturing goods, or pure advertising revenue?"
            }
            Self::SpecializedKnowledge => {
                "Does your activity rely on specialized creative, educational, \
                 or technical knowledge?"
            }
        }
    }

    pub fn examples(&self) -> &'static str {
        match self {
            Self::CommercialActivity => "Dropshipping, Amazon FBA, reselling items",
            Self::SpecializedKnowledge => "Tutoring, custom programming, writing, graphic design",
        }
    }
}

/// State of one pass through the classification flow.
///
/// Starts at the commercial-activity question with no result. Once a result
/// is set it stays immutable until [`QuizFlow::reset`]; further answers are
/// ignored. There is no back-navigation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuizFlow {
    question: Question,
    result: Option<Classification>,
}

impl Default for Question {
    fn default() -> Self {
        Self::CommercialActivity
    }
}

impl QuizFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// The question currently awaiting an answer.
    pub fn question(&self) -> Question {
        self.question
    }

    /// The classification, once the flow has completed.
    pub fn result(&self) -> Option<Classification> {
        self.result
    }

    /// Feeds one yes/no answer into the flow.
    ///
    /// The first answer is not inspected: the flowchart continues to the
    /// knowledge question either way. The second answer decides the outcome
    /// and returns the flow to the first question, result set.
    pub fn answer(
        &mut self,
        yes: bool,
    ) {
        if self.result.is_some() {
            debug!("answer after classification ignored");
            return;
        }
        match self.question {
            Question::CommercialActivity => {
                self.question = Question::SpecializedKnowledge;
            }
            Question::SpecializedKnowledge => {
                self.result = Some(if yes {
                    Classification::Freelancer
                } else {
                    Classification::Trader
                });
                self.question = Question::CommercialActivity;
            }
        }
    }

    /// Discards any result and returns to the first question.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
