pub mod analytics;
pub mod course;
pub mod error;
pub mod prereq_codes;
pub mod rebalance;
pub mod resolver;
pub mod semester;
pub mod snapshot;
pub mod state;

#[cfg(test)]
pub(crate) mod fixtures;

pub use analytics::{
    CourseLoad, Overview, PrerequisiteCount, ProfessorLoad, SemesterCredits, SemesterTotals,
    SlotFill,
};
pub use course::{Course, CourseKind, ElectiveEntry, Professor, Section};
pub use error::{PlannerError, PlannerResult};
pub use rebalance::MoveOutcome;
pub use semester::{Semester, Term};
pub use snapshot::{CatalogPayload, Snapshot, SnapshotImport};
pub use state::{CourseEdit, ElectiveEdit, PlanningState};
