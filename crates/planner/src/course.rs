use crate::semester::{Semester, Term};
use serde::{Deserialize, Serialize, Serializer};
use strum::{EnumIter, EnumProperty};

/// Classification of a course on the board
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumProperty,
)]
pub enum CourseKind {
    #[default]
    #[serde(rename = "ctis")]
    #[strum(props(label = "CTIS"))]
    StandardMajor,

    #[serde(rename = "non-ctis")]
    #[strum(props(label = "Non-CTIS"))]
    StandardMinor,

    #[serde(rename = "slot")]
    #[strum(props(label = "Elective Slot"))]
    ElectiveSlot,

    #[serde(rename = "is-elective")]
    #[strum(props(label = "IS Elective Slot"))]
    IsElectiveSlot,
}

impl CourseKind {
    /// Whether courses of this kind can be bound to a catalog elective
    pub fn is_slot(self) -> bool {
        matches!(self, Self::ElectiveSlot | Self::IsElectiveSlot)
    }

    pub fn label(self) -> &'static str {
        self.get_str("label").unwrap_or_default()
    }
}

/// One teaching instance of a course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SectionRecord", rename_all = "camelCase")]
pub struct Section {
    /// Assigned professor; serialized as an empty string when unassigned
    #[serde(serialize_with = "serialize_prof_id")]
    pub prof_id: Option<String>,
    /// Term tag derived from the counts
    pub sem: Term,
    pub fall_count: u32,
    pub spring_count: u32,
}

impl Section {
    pub fn new(prof_id: Option<String>, fall_count: u32, spring_count: u32) -> Self {
        Self {
            prof_id,
            sem: Term::from_counts(fall_count, spring_count),
            fall_count,
            spring_count,
        }
    }

    /// Recomputes the term tag from the counts
    pub fn retag(&mut self) {
        self.sem = Term::from_counts(self.fall_count, self.spring_count);
    }

    /// Exchanges the fall and spring counts and retags
    pub fn swap_terms(&mut self) {
        std::mem::swap(&mut self.fall_count, &mut self.spring_count);
        self.retag();
    }

    /// Counts attributed to (fall, spring) for workload purposes.
    /// A section tagged for one term only counts toward that term.
    pub fn load(&self) -> (u32, u32) {
        match self.sem {
            Term::Fall => (self.fall_count, 0),
            Term::Spring => (0, self.spring_count),
            Term::Both => (self.fall_count, self.spring_count),
        }
    }

    pub fn is_taught_by(&self, prof_id: &str) -> bool {
        self.prof_id.as_deref() == Some(prof_id)
    }
}

impl Default for Section {
    fn default() -> Self {
        Self::new(None, 1, 0)
    }
}

fn serialize_prof_id<S: Serializer>(prof_id: &Option<String>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(prof_id.as_deref().unwrap_or_default())
}

/// Section as it may appear in catalog files and older saves
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SectionRecord {
    #[serde(default)]
    prof_id: Option<String>,
    #[serde(default)]
    sem: Option<Term>,
    #[serde(default)]
    fall_count: Option<u32>,
    #[serde(default)]
    spring_count: Option<u32>,
    /// Legacy single count, applied to whichever terms the tag covers
    #[serde(default)]
    count: Option<u32>,
}

impl From<SectionRecord> for Section {
    fn from(record: SectionRecord) -> Self {
        let base = record.count.unwrap_or(0);
        let covers = |term: Term| matches!(record.sem, Some(t) if t == term || t == Term::Both);

        let fall_count = record
            .fall_count
            .unwrap_or(if covers(Term::Fall) { base } else { 0 });
        let spring_count = record
            .spring_count
            .unwrap_or(if covers(Term::Spring) { base } else { 0 });

        Self {
            prof_id: record.prof_id.filter(|id| !id.is_empty()),
            sem: record
                .sem
                .unwrap_or_else(|| Term::from_counts(fall_count, spring_count)),
            fall_count,
            spring_count,
        }
    }
}

/// Swaps fall/spring counts on every section
pub fn swap_sections(sections: &mut [Section]) {
    sections.iter_mut().for_each(Section::swap_terms);
}

/// A scheduled unit on the planning board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub short: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: CourseKind,
    /// Assigned semester
    #[serde(default)]
    pub sem: Semester,
    /// Semester the course sits in by default
    #[serde(default)]
    pub orig_sem: Semester,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub credits: f32,
    #[serde(default)]
    pub ects: f32,
    #[serde(default)]
    pub offered: Term,
    #[serde(default)]
    pub notes: String,
    /// Ids of prerequisite board courses, in insertion order
    #[serde(default)]
    pub prereqs: Vec<String>,
    #[serde(default)]
    pub sections: Vec<Section>,
    /// Catalog elective bound to this slot
    #[serde(default)]
    pub slot_assigned: Option<String>,
    /// Home semester remembered when the course leaves its normal role
    #[serde(rename = "_origSem", default, skip_serializing_if = "Option::is_none")]
    pub home_sem: Option<Semester>,
    /// Kind remembered while the course is marked as an IS slot
    #[serde(rename = "_savedType", default, skip_serializing_if = "Option::is_none")]
    pub saved_kind: Option<CourseKind>,
}

impl Course {
    /// A blank course as created from the board
    pub fn blank(id: String) -> Self {
        Self {
            id,
            code: String::new(),
            short: String::new(),
            name: String::new(),
            kind: CourseKind::StandardMajor,
            sem: Semester::FIRST,
            orig_sem: Semester::FIRST,
            x: 10.0,
            y: 100.0,
            credits: 3.0,
            ects: 5.0,
            offered: Term::Both,
            notes: String::new(),
            prereqs: Vec::new(),
            sections: Vec::new(),
            slot_assigned: None,
            home_sem: None,
            saved_kind: None,
        }
    }

    pub fn is_slot(&self) -> bool {
        self.kind.is_slot()
    }

    pub fn has_prerequisite(&self, id: &str) -> bool {
        self.prereqs.iter().any(|p| p == id)
    }
}

/// A member of teaching staff; sections refer to it by id only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Professor {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub dept: String,
}

/// An interdisciplinary elective that lives in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectiveEntry {
    pub id: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub short: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub credits: f32,
    #[serde(default)]
    pub ects: f32,
    #[serde(default)]
    pub offered: Term,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
    #[serde(default)]
    pub sections: Vec<Section>,
    /// Prerequisite course codes, e.g. `"CTIS 151, MATH 101 OR MATH 105"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prereq_codes: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prereqs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orig_sem: Option<Semester>,
    #[serde(rename = "_origSem", default, skip_serializing_if = "Option::is_none")]
    pub home_sem: Option<Semester>,
}

impl ElectiveEntry {
    /// Builds a catalog entry carrying a board course's data
    pub fn from_course(course: &Course, prereq_codes: Option<String>) -> Self {
        Self {
            id: course.id.clone(),
            code: course.code.clone(),
            short: course.short.clone(),
            name: course.name.clone(),
            credits: course.credits,
            ects: course.ects,
            offered: course.offered,
            notes: course.notes.clone(),
            sections: course.sections.clone(),
            prereq_codes,
            prereqs: course.prereqs.clone(),
            orig_sem: Some(course.orig_sem),
            home_sem: Some(course.home_sem.unwrap_or(course.orig_sem)),
        }
    }

    /// Semester the elective is placed in when it goes onto the board
    pub fn home_semester(&self) -> Option<Semester> {
        self.home_sem.or(self.orig_sem)
    }
}
