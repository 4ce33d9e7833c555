//! Wizard step sequence.
//!
//! Intro → Templates → HotCriteria → CrazyCriteria → People → Results.
//! Moving back is always allowed; moving forward is gated by the session
//! (see [`crate::session::Session::advance`]).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of steps that show a progress indicator
pub const TOTAL_PROGRESS_STEPS: u8 = 5;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Step {
    #[default]
    Intro,
    Templates,
    HotCriteria,
    CrazyCriteria,
    People,
    Results,
}

impl Step {
    pub fn next(&self) -> Option<Step> {
        match self {
            Step::Intro => Some(Step::Templates),
            Step::Templates => Some(Step::HotCriteria),
            Step::HotCriteria => Some(Step::CrazyCriteria),
            Step::CrazyCriteria => Some(Step::People),
            Step::People => Some(Step::Results),
            Step::Results => None,
        }
    }

    /// Previous step; the intro has none
    pub fn previous(&self) -> Option<Step> {
        match self {
            Step::Intro => None,
            Step::Templates => Some(Step::Intro),
            Step::HotCriteria => Some(Step::Templates),
            Step::CrazyCriteria => Some(Step::HotCriteria),
            Step::People => Some(Step::CrazyCriteria),
            Step::Results => Some(Step::People),
        }
    }

    /// `(current, total)` for the progress indicator; results show none
    pub fn progress(&self) -> Option<(u8, u8)> {
        let current = match self {
            Step::Intro => 1,
            Step::Templates => 2,
            Step::HotCriteria => 3,
            Step::CrazyCriteria => 4,
            Step::People => 5,
            Step::Results => return None,
        };
        Some((current, TOTAL_PROGRESS_STEPS))
    }

    /// Progress as a whole percentage
    pub fn progress_percent(&self) -> Option<u8> {
        self.progress().map(|(current, total)| {
            ((f64::from(current) / f64::from(total)) * 100.0).round() as u8
        })
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::Intro => "Introduction",
            Step::Templates => "Choose a Template",
            Step::HotCriteria => "Define Hot Criteria",
            Step::CrazyCriteria => "Define Crazy Criteria",
            Step::People => "Score People",
            Step::Results => "Compatibility Results",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_previous_are_inverse() {
        let mut step = Step::Intro;
        while let Some(next) = step.next() {
            assert_eq!(next.previous(), Some(step));
            step = next;
        }
        assert_eq!(step, Step::Results);
    }

    #[test]
    fn progress_numbers_steps_one_to_five() {
        assert_eq!(Step::Intro.progress(), Some((1, 5)));
        assert_eq!(Step::HotCriteria.progress(), Some((3, 5)));
        assert_eq!(Step::People.progress(), Some((5, 5)));
        assert_eq!(Step::Results.progress(), None);
        assert_eq!(Step::CrazyCriteria.progress_percent(), Some(80));
    }
}
