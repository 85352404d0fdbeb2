use crate::{
    course::{Course, CourseKind, ElectiveEntry, Professor, Section},
    error::{PlannerError, PlannerResult},
    semester::Term,
    snapshot::{CatalogPayload, Snapshot, SnapshotImport},
};
use log::{debug, info, warn};
use petgraph::{algo::has_path_connecting, graphmap::DiGraphMap};
use serde_json::Value;
use std::collections::HashMap;
use uuid::Uuid;

/// Department given to professors added without one
pub const DEFAULT_DEPARTMENT: &str = "CTIS";

/// The working copy of a planning session.
///
/// Holds the editable courses, professors and elective catalog, the
/// pristine copy they were initialized from, and each elective slot's
/// original prerequisites. Every mutation goes through a method here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanningState {
    pub(crate) courses: Vec<Course>,
    pub(crate) profs: Vec<Professor>,
    pub(crate) catalog: Vec<ElectiveEntry>,
    pub(crate) pristine: Snapshot,
    pub(crate) slot_original_prereqs: HashMap<String, Vec<String>>,
}

/// Field changes for a board course; `None` leaves a field as it is
#[derive(Debug, Clone, Default)]
pub struct CourseEdit {
    pub code: Option<String>,
    pub short: Option<String>,
    pub name: Option<String>,
    pub credits: Option<f32>,
    pub ects: Option<f32>,
    pub kind: Option<CourseKind>,
    pub offered: Option<Term>,
    pub notes: Option<String>,
    pub sections: Option<Vec<Section>>,
}

/// Field changes for a catalog elective; `None` leaves a field as it is
#[derive(Debug, Clone, Default)]
pub struct ElectiveEdit {
    pub code: Option<String>,
    pub short: Option<String>,
    pub name: Option<String>,
    pub credits: Option<f32>,
    pub ects: Option<f32>,
    pub sections: Option<Vec<Section>>,
}

/// Generates an id for entities created during a session
pub(crate) fn fresh_id() -> String {
    format!("c{}", Uuid::new_v4().simple())
}

fn retagged(mut sections: Vec<Section>) -> Vec<Section> {
    sections.iter_mut().for_each(Section::retag);
    sections
}

fn slot_prereqs(courses: &[Course]) -> HashMap<String, Vec<String>> {
    courses
        .iter()
        .filter(|c| c.is_slot())
        .map(|c| (c.id.clone(), c.prereqs.clone()))
        .collect()
}

impl PlanningState {
    /// Builds a session from the catalog, keeping a pristine copy for resets
    pub fn initialize(catalog: CatalogPayload) -> Self {
        let pristine = Snapshot {
            courses: catalog.courses,
            profs: catalog.professors,
            catalog: catalog.is_electives,
        };

        info!(
            "Initialized planning state with {} courses, {} professors, {} electives",
            pristine.courses.len(),
            pristine.profs.len(),
            pristine.catalog.len()
        );

        Self {
            courses: pristine.courses.clone(),
            profs: pristine.profs.clone(),
            catalog: pristine.catalog.clone(),
            slot_original_prereqs: slot_prereqs(&pristine.courses),
            pristine,
        }
    }

    /// An independent copy of the working state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            courses: self.courses.clone(),
            profs: self.profs.clone(),
            catalog: self.catalog.clone(),
        }
    }

    /// Replaces every field present in the import; absent fields are kept
    pub fn restore(&mut self, import: SnapshotImport) {
        if let Some(courses) = import.courses {
            self.courses = courses;
        }
        if let Some(profs) = import.profs {
            self.profs = profs;
        }
        if let Some(catalog) = import.catalog {
            self.catalog = catalog;
        }
        debug!("Restored snapshot ({} courses on board)", self.courses.len());
    }

    /// Restores from JSON text; a malformed document leaves the state untouched
    pub fn restore_json(&mut self, json: &str) -> PlannerResult<()> {
        let import = SnapshotImport::from_json(json).inspect_err(|e| warn!("Import rejected: {e}"))?;
        self.restore(import);
        Ok(())
    }

    /// Restores from an already-parsed JSON value, such as a stored layout row
    pub fn restore_value(&mut self, value: Value) -> PlannerResult<()> {
        let import =
            SnapshotImport::from_value(value).inspect_err(|e| warn!("Import rejected: {e}"))?;
        self.restore(import);
        Ok(())
    }

    /// Discards every session edit
    pub fn reset(&mut self) {
        self.courses = self.pristine.courses.clone();
        self.profs = self.pristine.profs.clone();
        self.catalog = self.pristine.catalog.clone();
        self.slot_original_prereqs = slot_prereqs(&self.pristine.courses);
        info!("Reset planning state to the catalog layout");
    }

    pub fn export_json(&self) -> PlannerResult<String> {
        self.snapshot().to_json_pretty()
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn professors(&self) -> &[Professor] {
        &self.profs
    }

    pub fn catalog(&self) -> &[ElectiveEntry] {
        &self.catalog
    }

    pub fn pristine(&self) -> &Snapshot {
        &self.pristine
    }

    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    pub fn professor(&self, id: &str) -> Option<&Professor> {
        self.profs.iter().find(|p| p.id == id)
    }

    pub fn elective(&self, id: &str) -> Option<&ElectiveEntry> {
        self.catalog.iter().find(|e| e.id == id)
    }

    /// Prerequisites an elective slot had when the session started
    pub fn slot_original_prereqs(&self, slot_id: &str) -> &[String] {
        self.slot_original_prereqs
            .get(slot_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub(crate) fn course_index(&self, id: &str) -> PlannerResult<usize> {
        self.courses
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| PlannerError::CourseNotFound(id.to_string()))
    }

    pub(crate) fn course_mut(&mut self, id: &str) -> PlannerResult<&mut Course> {
        let idx = self.course_index(id)?;
        Ok(&mut self.courses[idx])
    }

    pub(crate) fn elective_mut(&mut self, id: &str) -> Option<&mut ElectiveEntry> {
        self.catalog.iter_mut().find(|e| e.id == id)
    }

    pub(crate) fn pristine_elective(&self, id: &str) -> Option<&ElectiveEntry> {
        self.pristine.catalog.iter().find(|e| e.id == id)
    }

    /// Adds a blank course to the first semester and returns its id
    pub fn add_course(&mut self) -> String {
        let id = fresh_id();
        self.courses.push(Course::blank(id.clone()));
        debug!("Added course {id}");
        id
    }

    pub fn update_course(&mut self, id: &str, edit: CourseEdit) -> PlannerResult<()> {
        let idx = self.course_index(id)?;
        let in_catalog = self.elective(id).is_some();

        let course = &mut self.courses[idx];
        if let Some(code) = edit.code {
            course.code = code.trim().to_string();
        }
        if let Some(short) = edit.short {
            course.short = short.trim().to_string();
        }
        if let Some(name) = edit.name {
            course.name = name.trim().to_string();
        }
        if let Some(credits) = edit.credits {
            course.credits = credits;
        }
        if let Some(ects) = edit.ects {
            course.ects = ects;
        }
        if let Some(sections) = edit.sections {
            course.sections = retagged(sections);
        }

        // Catalog-backed courses keep their classification
        if in_catalog {
            return Ok(());
        }
        if let Some(offered) = edit.offered {
            course.offered = offered;
        }
        if let Some(notes) = edit.notes {
            course.notes = notes.trim().to_string();
        }
        if let Some(kind) = edit.kind {
            course.kind = kind;
            if kind.is_slot() {
                let prereqs = course.prereqs.clone();
                self.slot_original_prereqs
                    .entry(id.to_string())
                    .or_insert(prereqs);
            } else {
                self.release_binding(idx);
            }
        }

        Ok(())
    }

    pub fn update_elective(&mut self, id: &str, edit: ElectiveEdit) -> PlannerResult<()> {
        let entry = self
            .elective_mut(id)
            .ok_or_else(|| PlannerError::ElectiveNotFound(id.to_string()))?;

        if let Some(code) = edit.code {
            entry.code = code.trim().to_string();
        }
        if let Some(short) = edit.short {
            entry.short = short.trim().to_string();
        }
        if let Some(name) = edit.name {
            entry.name = name.trim().to_string();
        }
        if let Some(credits) = edit.credits {
            entry.credits = credits;
        }
        if let Some(ects) = edit.ects {
            entry.ects = ects;
        }
        if let Some(sections) = edit.sections {
            entry.sections = retagged(sections);
        }

        Ok(())
    }

    /// Removes a course and every prerequisite link pointing at it
    pub fn delete_course(&mut self, id: &str) -> PlannerResult<Course> {
        let idx = self.course_index(id)?;
        self.release_binding(idx);

        let removed = self.courses.remove(idx);
        self.strip_prerequisite(id);
        self.slot_original_prereqs.remove(id);

        info!("Deleted course {} ({})", removed.code, removed.id);
        Ok(removed)
    }

    /// Drops `id` from every prerequisite list, live and remembered
    pub(crate) fn strip_prerequisite(&mut self, id: &str) {
        for course in &mut self.courses {
            course.prereqs.retain(|p| p != id);
        }
        for prereqs in self.slot_original_prereqs.values_mut() {
            prereqs.retain(|p| p != id);
        }
    }

    /// Links `prereq` as a prerequisite of `course`, refusing cycles
    pub fn add_prerequisite(&mut self, course: &str, prereq: &str) -> PlannerResult<()> {
        let idx = self.course_index(course)?;
        self.course_index(prereq)?;

        if course == prereq {
            return Err(PlannerError::SelfPrerequisite(course.to_string()));
        }
        if self.courses[idx].has_prerequisite(prereq) {
            return Ok(());
        }
        if self.reaches(course, prereq) {
            warn!("Rejected prerequisite {prereq} -> {course}: cycle");
            return Err(PlannerError::PrerequisiteCycle {
                course: course.to_string(),
                prerequisite: prereq.to_string(),
            });
        }

        self.courses[idx].prereqs.push(prereq.to_string());
        Ok(())
    }

    pub fn remove_prerequisite(&mut self, course: &str, prereq: &str) -> PlannerResult<()> {
        self.course_mut(course)?.prereqs.retain(|p| p != prereq);
        Ok(())
    }

    /// Adds the link if missing, removes it otherwise; returns whether it now exists
    pub fn toggle_prerequisite(&mut self, course: &str, prereq: &str) -> PlannerResult<bool> {
        let exists = self
            .course(course)
            .ok_or_else(|| PlannerError::CourseNotFound(course.to_string()))?
            .has_prerequisite(prereq);

        if exists {
            self.remove_prerequisite(course, prereq)?;
        } else {
            self.add_prerequisite(course, prereq)?;
        }
        Ok(!exists)
    }

    /// Whether `to` is reachable from `from` following prerequisite -> dependent edges
    fn reaches(&self, from: &str, to: &str) -> bool {
        let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();
        for course in &self.courses {
            graph.add_node(course.id.as_str());
            for prereq in &course.prereqs {
                graph.add_edge(prereq.as_str(), course.id.as_str(), ());
            }
        }

        has_path_connecting(&graph, from, to, None)
    }

    /// Adds a professor and returns the new id
    pub fn add_professor(&mut self, name: &str, dept: &str) -> PlannerResult<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PlannerError::EmptyProfessorName);
        }

        let dept = match dept.trim() {
            "" => DEFAULT_DEPARTMENT,
            dept => dept,
        };

        let id = fresh_id();
        self.profs.push(Professor {
            id: id.clone(),
            name: name.to_string(),
            dept: dept.to_string(),
        });
        Ok(id)
    }

    /// Removes a professor, unassigning their sections on the board and in
    /// the catalog. Returns how many sections were unassigned.
    pub fn delete_professor(&mut self, id: &str) -> PlannerResult<usize> {
        let idx = self
            .profs
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| PlannerError::ProfessorNotFound(id.to_string()))?;
        let removed = self.profs.remove(idx);

        let board = self.courses.iter_mut().flat_map(|c| c.sections.iter_mut());
        let catalog = self.catalog.iter_mut().flat_map(|e| e.sections.iter_mut());

        let mut unassigned = 0;
        for section in board.chain(catalog) {
            if section.is_taught_by(id) {
                section.prof_id = None;
                unassigned += 1;
            }
        }

        info!("Deleted professor {} ({unassigned} sections unassigned)", removed.name);
        Ok(unassigned)
    }
}
