use thiserror::Error;

/// Result type for planning-state operations
pub type PlannerResult<T> = Result<T, PlannerError>;

/// Errors raised by planning-state operations.
///
/// Operations validate before they mutate, so an error always means the
/// state was left exactly as it was.
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("course not found: {0}")]
    CourseNotFound(String),

    #[error("elective not found: {0}")]
    ElectiveNotFound(String),

    #[error("professor not found: {0}")]
    ProfessorNotFound(String),

    #[error("course {0} is not an elective slot")]
    NotAnElectiveSlot(String),

    #[error("{0} is already on the board")]
    AlreadyOnBoard(String),

    #[error("semester {0} is outside 1..=8")]
    SemesterOutOfRange(u8),

    #[error("course {0} cannot be its own prerequisite")]
    SelfPrerequisite(String),

    #[error("adding {prerequisite} as a prerequisite of {course} would create a cycle")]
    PrerequisiteCycle { course: String, prerequisite: String },

    #[error("professor name is required")]
    EmptyProfessorName,

    #[error("malformed snapshot: {0}")]
    MalformedSnapshot(#[from] serde_json::Error),
}
