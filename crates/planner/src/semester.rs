use crate::error::PlannerError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use strum::{AsRefStr, EnumIter, EnumProperty, EnumString, IntoEnumIterator};

/// Number of semesters on the board
pub const NUM_SEMESTERS: u8 = 8;

/// Width of one semester lane on the board, in pixels
pub const LANE_WIDTH: f64 = 190.0;

/// Term-of-year a course or section is offered in
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Term {
    Fall,
    Spring,
    #[default]
    Both,
}

impl Term {
    /// Derives the term tag from per-term section counts
    pub fn from_counts(fall: u32, spring: u32) -> Self {
        match (fall > 0, spring > 0) {
            (true, false) => Self::Fall,
            (false, true) => Self::Spring,
            _ => Self::Both,
        }
    }

    pub fn as_str(&self) -> &str {
        self.as_ref()
    }
}

/// A semester index on the board, always within `1..=8`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Semester(u8);

#[derive(Debug, Clone, Copy, EnumIter, EnumProperty)]
enum SemesterLabel {
    #[strum(props(season = "Fall"))]
    First,
    #[strum(props(season = "Spring"))]
    Second,
    #[strum(props(season = "Fall"))]
    Third,
    #[strum(props(season = "Spring"))]
    Fourth,
    #[strum(props(season = "Fall"))]
    Fifth,
    #[strum(props(season = "Spring (Intern.)"))]
    Sixth,
    #[strum(props(season = "Fall"))]
    Seventh,
    #[strum(props(season = "Spring"))]
    Eighth,
}

impl Semester {
    pub const FIRST: Self = Semester(1);
    /// The internship semester; section offerings never flip around it
    pub const BOUNDARY: Self = Semester(6);
    /// Home semester given to catalog electives that carry none
    pub const ELECTIVE_DEFAULT: Self = Semester(7);

    pub fn new(index: u8) -> Result<Self, PlannerError> {
        if (1..=NUM_SEMESTERS).contains(&index) {
            Ok(Self(index))
        } else {
            Err(PlannerError::SemesterOutOfRange(index))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = Semester> {
        (1..=NUM_SEMESTERS).map(Semester)
    }

    /// The term this semester's teaching pattern leans toward
    pub fn parity(self) -> Term {
        if self.0 % 2 == 1 {
            Term::Fall
        } else {
            Term::Spring
        }
    }

    pub fn is_boundary(self) -> bool {
        self == Self::BOUNDARY
    }

    /// Season label shown above the lane
    pub fn season(self) -> &'static str {
        SemesterLabel::iter()
            .nth(usize::from(self.0 - 1))
            .and_then(|label| label.get_str("season"))
            .unwrap_or_default()
    }

    /// Left edge of this semester's lane
    pub fn lane_x(self) -> f64 {
        f64::from(self.0 - 1) * LANE_WIDTH + 8.0
    }

    /// Maps a board x coordinate to the lane under it, clamped to the board
    pub fn from_board_x(x: f64) -> Self {
        if x.is_nan() {
            return Self::FIRST;
        }
        let lane = (x / LANE_WIDTH).floor() + 1.0;
        Self(lane.clamp(1.0, f64::from(NUM_SEMESTERS)) as u8)
    }
}

impl Default for Semester {
    fn default() -> Self {
        Self::FIRST
    }
}

impl TryFrom<u8> for Semester {
    type Error = PlannerError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl From<Semester> for u8 {
    fn from(semester: Semester) -> Self {
        semester.0
    }
}

impl Display for Semester {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}
