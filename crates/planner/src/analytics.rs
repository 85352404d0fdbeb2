//! Read-only projections over the planning state

use crate::{
    course::{CourseKind, Section},
    semester::{NUM_SEMESTERS, Semester},
    state::PlanningState,
};
use serde::Serialize;
use std::collections::HashSet;
use strum::IntoEnumIterator;

/// Sections a professor may teach in a year before being flagged
pub const MAX_TOTAL_SECTIONS: u32 = 8;
/// Sections a professor may teach in one term before being flagged
pub const MAX_TERM_SECTIONS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SemesterCredits {
    pub semester: Semester,
    pub credits: f32,
    pub ects: f32,
}

/// Credit and ECTS sums per semester lane
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SemesterTotals {
    pub semesters: Vec<SemesterCredits>,
    pub credits: f32,
    pub ects: f32,
}

impl SemesterTotals {
    pub fn get(&self, semester: Semester) -> &SemesterCredits {
        &self.semesters[usize::from(semester.get() - 1)]
    }
}

/// One course's share of a professor's sections
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseLoad {
    pub course_id: String,
    pub code: String,
    pub fall: u32,
    pub spring: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfessorLoad {
    pub professor_id: String,
    pub name: String,
    pub fall: u32,
    pub spring: u32,
    pub courses: Vec<CourseLoad>,
}

impl ProfessorLoad {
    pub fn total(&self) -> u32 {
        self.fall + self.spring
    }

    pub fn over_capacity(&self) -> bool {
        self.total() > MAX_TOTAL_SECTIONS
            || self.fall > MAX_TERM_SECTIONS
            || self.spring > MAX_TERM_SECTIONS
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotFill {
    pub filled: usize,
    pub total: usize,
}

impl SlotFill {
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.filled as f64 / self.total as f64
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Overview {
    pub courses: usize,
    pub by_kind: Vec<(CourseKind, usize)>,
    pub professors: usize,
    pub catalog_entries: usize,
}

impl Overview {
    pub fn count(&self, kind: CourseKind) -> usize {
        self.by_kind
            .iter()
            .find(|(k, _)| *k == kind)
            .map_or(0, |(_, n)| *n)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrerequisiteCount {
    pub course_id: String,
    pub code: String,
    pub count: usize,
}

impl PlanningState {
    pub fn semester_totals(&self) -> SemesterTotals {
        let mut semesters: Vec<SemesterCredits> = Semester::all()
            .map(|semester| SemesterCredits {
                semester,
                credits: 0.0,
                ects: 0.0,
            })
            .collect();

        for course in &self.courses {
            let lane = &mut semesters[usize::from(course.sem.get() - 1)];
            lane.credits += course.credits;
            lane.ects += course.ects;
        }
        debug_assert_eq!(semesters.len(), usize::from(NUM_SEMESTERS));

        SemesterTotals {
            credits: semesters.iter().map(|s| s.credits).sum(),
            ects: semesters.iter().map(|s| s.ects).sum(),
            semesters,
        }
    }

    /// Section counts per professor.
    ///
    /// Counts board courses and any catalog electives whose id is not on the
    /// board, so staff who only teach unplaced electives still show up.
    pub fn professor_loads(&self) -> Vec<ProfessorLoad> {
        let on_board: HashSet<&str> = self.courses.iter().map(|c| c.id.as_str()).collect();
        let teaching: Vec<(&str, &str, &[Section])> = self
            .courses
            .iter()
            .map(|c| (c.id.as_str(), c.code.as_str(), c.sections.as_slice()))
            .chain(
                self.catalog
                    .iter()
                    .filter(|e| !on_board.contains(e.id.as_str()))
                    .map(|e| (e.id.as_str(), e.code.as_str(), e.sections.as_slice())),
            )
            .collect();

        self.profs
            .iter()
            .map(|prof| {
                let courses: Vec<CourseLoad> = teaching
                    .iter()
                    .filter_map(|(id, code, sections)| {
                        let (fall, spring) = sections
                            .iter()
                            .filter(|s| s.is_taught_by(&prof.id))
                            .map(Section::load)
                            .fold((0, 0), |(f, s), (df, ds)| (f + df, s + ds));
                        sections
                            .iter()
                            .any(|s| s.is_taught_by(&prof.id))
                            .then(|| CourseLoad {
                                course_id: id.to_string(),
                                code: code.to_string(),
                                fall,
                                spring,
                            })
                    })
                    .collect();

                ProfessorLoad {
                    professor_id: prof.id.clone(),
                    name: prof.name.clone(),
                    fall: courses.iter().map(|c| c.fall).sum(),
                    spring: courses.iter().map(|c| c.spring).sum(),
                    courses,
                }
            })
            .collect()
    }

    /// How many IS elective slots on the board are bound
    pub fn slot_fill(&self) -> SlotFill {
        let slots = self
            .courses
            .iter()
            .filter(|c| c.kind == CourseKind::IsElectiveSlot);

        let (filled, total) = slots.fold((0, 0), |(filled, total), c| {
            (filled + usize::from(c.slot_assigned.is_some()), total + 1)
        });
        SlotFill { filled, total }
    }

    pub fn overview(&self) -> Overview {
        Overview {
            courses: self.courses.len(),
            by_kind: CourseKind::iter()
                .map(|kind| (kind, self.courses.iter().filter(|c| c.kind == kind).count()))
                .collect(),
            professors: self.profs.len(),
            catalog_entries: self.catalog.len(),
        }
    }

    pub fn prerequisite_counts(&self) -> Vec<PrerequisiteCount> {
        self.courses
            .iter()
            .map(|c| PrerequisiteCount {
                course_id: c.id.clone(),
                code: c.code.clone(),
                count: c.prereqs.len(),
            })
            .collect()
    }
}
