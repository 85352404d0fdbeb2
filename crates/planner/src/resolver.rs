use crate::{
    course::{Course, CourseKind, ElectiveEntry, Section, swap_sections},
    error::{PlannerError, PlannerResult},
    prereq_codes::{render_prerequisite_codes, resolve_prerequisite_ids},
    semester::{Semester, Term},
    state::PlanningState,
};
use log::{debug, info};

/// Vertical position given to electives placed back on the board
const PLACED_ELECTIVE_Y: f64 = 260.0;

/// Flips sections so their dominant term matches the target semester.
///
/// Leaves the sections alone when they are empty, balanced, already aligned,
/// or when the target is the boundary semester. Returns whether a swap
/// happened.
pub fn align_sections(sections: &mut [Section], target: Semester) -> bool {
    if sections.is_empty() || target.is_boundary() {
        return false;
    }

    let fall: u32 = sections.iter().map(|s| s.fall_count).sum();
    let spring: u32 = sections.iter().map(|s| s.spring_count).sum();
    if fall == spring {
        return false;
    }

    let dominant = if fall > spring { Term::Fall } else { Term::Spring };
    if dominant == target.parity() {
        return false;
    }

    swap_sections(sections);
    true
}

impl PlanningState {
    /// Binds a catalog elective to an elective slot on the board
    pub fn assign(&mut self, slot_id: &str, elective_id: &str) -> PlannerResult<()> {
        let idx = self.course_index(slot_id)?;
        if !self.courses[idx].is_slot() {
            return Err(PlannerError::NotAnElectiveSlot(slot_id.to_string()));
        }

        let pristine = self.pristine_elective(elective_id).cloned();
        if self.elective(elective_id).is_none() {
            let Some(entry) = pristine.clone() else {
                return Err(PlannerError::ElectiveNotFound(elective_id.to_string()));
            };
            self.catalog.push(entry);
        }

        if self.courses[idx].slot_assigned.as_deref() != Some(elective_id) {
            self.release_binding(idx);
        }

        let target = self.courses[idx].sem;
        let entry = self
            .elective_mut(elective_id)
            .ok_or_else(|| PlannerError::ElectiveNotFound(elective_id.to_string()))?;
        if let Some(pristine) = pristine {
            entry.sections = pristine.sections;
        }
        let swapped = align_sections(&mut entry.sections, target);
        let prereq_codes = entry.prereq_codes.clone().unwrap_or_default();

        let prereqs = resolve_prerequisite_ids(&prereq_codes, &self.courses, slot_id);
        let slot = &mut self.courses[idx];
        slot.slot_assigned = Some(elective_id.to_string());
        slot.prereqs = prereqs;

        info!(
            "Assigned {elective_id} to slot {slot_id} (semester {target}, swapped: {swapped})"
        );
        Ok(())
    }

    /// Unbinds a slot, restoring the elective's sections and the slot's
    /// original prerequisites
    pub fn clear(&mut self, slot_id: &str) -> PlannerResult<()> {
        let idx = self.course_index(slot_id)?;
        self.release_binding(idx);

        let original = self
            .slot_original_prereqs(slot_id)
            .iter()
            .filter(|id| self.course(id).is_some())
            .cloned()
            .collect();
        self.courses[idx].prereqs = original;

        debug!("Cleared slot {slot_id}");
        Ok(())
    }

    /// Aligns a catalog elective's sections with a target semester
    pub fn semester_align(&mut self, elective_id: &str, target: Semester) -> PlannerResult<bool> {
        let entry = self
            .elective_mut(elective_id)
            .ok_or_else(|| PlannerError::ElectiveNotFound(elective_id.to_string()))?;
        Ok(align_sections(&mut entry.sections, target))
    }

    /// Drops the binding of the slot at `idx`, putting the bound elective's
    /// sections back to their pristine values
    pub(crate) fn release_binding(&mut self, idx: usize) {
        if let Some(bound) = self.courses[idx].slot_assigned.take() {
            self.restore_pristine_sections(&bound);
        }
    }

    pub(crate) fn restore_pristine_sections(&mut self, elective_id: &str) {
        let Some(sections) = self
            .pristine_elective(elective_id)
            .map(|e| e.sections.clone())
        else {
            return;
        };

        if let Some(entry) = self.elective_mut(elective_id) {
            entry.sections = sections;
        }
    }

    /// Moves a board course into the elective catalog.
    ///
    /// The entry is mirrored into the pristine catalog so later resets and
    /// slot clears see it.
    pub fn promote(&mut self, course_id: &str) -> PlannerResult<()> {
        let idx = self.course_index(course_id)?;
        self.release_binding(idx);

        let course = &self.courses[idx];
        let codes = render_prerequisite_codes(&course.prereqs, &self.courses);
        let entry = ElectiveEntry::from_course(course, (!codes.is_empty()).then_some(codes));

        match self.elective_mut(course_id) {
            Some(existing) => *existing = entry.clone(),
            None => self.catalog.push(entry.clone()),
        }
        match self.pristine.catalog.iter_mut().find(|e| e.id == course_id) {
            Some(existing) => *existing = entry,
            None => self.pristine.catalog.push(entry),
        }

        let removed = self.courses.remove(idx);
        self.strip_prerequisite(course_id);
        self.slot_original_prereqs.remove(course_id);

        info!("Moved {} to the elective catalog", removed.code);
        Ok(())
    }

    /// Places a catalog elective on the board as a regular course.
    ///
    /// Returns the id of the placed course.
    pub fn demote(&mut self, elective_id: &str) -> PlannerResult<String> {
        let entry = self
            .elective(elective_id)
            .ok_or_else(|| PlannerError::ElectiveNotFound(elective_id.to_string()))?;

        if self
            .courses
            .iter()
            .any(|c| c.id == entry.id || c.code == entry.code)
        {
            return Err(PlannerError::AlreadyOnBoard(entry.code.clone()));
        }

        let home = entry
            .home_semester()
            .or_else(|| {
                self.pristine
                    .courses
                    .iter()
                    .find(|c| c.id == elective_id)
                    .and_then(|c| c.home_sem)
            })
            .unwrap_or(Semester::ELECTIVE_DEFAULT);

        let prereqs = entry
            .prereq_codes
            .as_deref()
            .map(|codes| resolve_prerequisite_ids(codes, &self.courses, elective_id))
            .unwrap_or_default();

        let sections = self
            .pristine_elective(elective_id)
            .map_or_else(|| entry.sections.clone(), |p| p.sections.clone());

        let course = Course {
            id: entry.id.clone(),
            code: entry.code.clone(),
            short: entry.short.clone(),
            name: entry.name.clone(),
            kind: CourseKind::StandardMajor,
            sem: home,
            orig_sem: home,
            x: home.lane_x() + 10.0,
            y: PLACED_ELECTIVE_Y,
            credits: entry.credits,
            ects: entry.ects,
            offered: Term::Both,
            notes: String::new(),
            prereqs,
            sections,
            slot_assigned: None,
            home_sem: Some(home),
            saved_kind: None,
        };

        // Slots bound to this elective would point at nothing once it leaves the catalog
        let bound: Vec<String> = self
            .courses
            .iter()
            .filter(|c| c.slot_assigned.as_deref() == Some(elective_id))
            .map(|c| c.id.clone())
            .collect();
        for slot_id in bound {
            self.clear(&slot_id)?;
        }

        self.catalog.retain(|e| e.id != elective_id);
        info!("Placed {} on the board in semester {home}", course.code);
        self.courses.push(course);

        Ok(elective_id.to_string())
    }

    /// Turns a board course into an IS elective slot, listing it in the catalog
    pub fn mark_elective_slot(&mut self, course_id: &str) -> PlannerResult<()> {
        let idx = self.course_index(course_id)?;
        if self.courses[idx].kind == CourseKind::IsElectiveSlot {
            return Ok(());
        }
        self.release_binding(idx);

        let course = &mut self.courses[idx];
        course.home_sem.get_or_insert(course.orig_sem);
        course.saved_kind = Some(course.kind);
        course.kind = CourseKind::IsElectiveSlot;

        let course = &self.courses[idx];
        let codes = render_prerequisite_codes(&course.prereqs, &self.courses);
        let entry = ElectiveEntry::from_course(course, (!codes.is_empty()).then_some(codes));
        self.slot_original_prereqs
            .entry(course_id.to_string())
            .or_insert_with(|| course.prereqs.clone());

        if self.elective(course_id).is_none() {
            self.catalog.push(entry.clone());
            if self.pristine_elective(course_id).is_none() {
                self.pristine.catalog.push(entry);
            }
        }

        debug!("Marked {course_id} as an IS elective slot");
        Ok(())
    }

    /// Reverts [`PlanningState::mark_elective_slot`], returning the course to
    /// its remembered kind and home semester
    pub fn unmark_elective_slot(&mut self, course_id: &str) -> PlannerResult<()> {
        let idx = self.course_index(course_id)?;
        self.release_binding(idx);

        let course = &mut self.courses[idx];
        course.kind = course.saved_kind.take().unwrap_or_default();
        if let Some(home) = course.home_sem {
            course.orig_sem = home;
            course.sem = home;
            course.x = home.lane_x() + 10.0;
        }

        debug!("Removed IS slot status from {course_id}");
        Ok(())
    }
}
