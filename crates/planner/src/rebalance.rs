use crate::{
    course::swap_sections, error::PlannerResult, resolver::align_sections, semester::Semester,
    state::PlanningState,
};
use log::debug;

/// What happened when a course changed lanes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub from: Semester,
    pub to: Semester,
    /// Whether section counts were swapped between fall and spring
    pub swapped: bool,
}

impl PlanningState {
    /// Drops a course at a board position, moving it to the semester lane
    /// under `x`
    pub fn move_course(&mut self, id: &str, x: f64, y: f64) -> PlannerResult<MoveOutcome> {
        let idx = self.course_index(id)?;
        let to = Semester::from_board_x(x);
        let course = &mut self.courses[idx];
        // Non-finite coordinates serialize as null and would not load back
        course.x = if x.is_finite() {
            x.max(0.0)
        } else {
            to.lane_x() + 10.0
        };
        course.y = if y.is_finite() { y.max(0.0) } else { 0.0 };

        Ok(self.relocate(idx, to))
    }

    /// Moves a course to the start of a semester lane
    pub fn set_semester(&mut self, id: &str, semester: Semester) -> PlannerResult<MoveOutcome> {
        let idx = self.course_index(id)?;
        self.courses[idx].x = semester.lane_x() + 10.0;

        Ok(self.relocate(idx, semester))
    }

    fn relocate(&mut self, idx: usize, to: Semester) -> MoveOutcome {
        let course = &mut self.courses[idx];
        let from = course.sem;
        course.sem = to;

        // Semester 6 runs both terms, so crossing it never flips anything
        let swapped = from.parity() != to.parity() && !from.is_boundary() && !to.is_boundary();
        if !swapped {
            return MoveOutcome { from, to, swapped };
        }

        swap_sections(&mut course.sections);
        let bound = course
            .is_slot()
            .then(|| course.slot_assigned.clone())
            .flatten();

        if let Some(elective_id) = bound {
            self.restore_pristine_sections(&elective_id);
            if let Some(entry) = self.elective_mut(&elective_id) {
                align_sections(&mut entry.sections, to);
            }
        }

        debug!(
            "Moved {} from semester {from} to {to}, swapped sections",
            self.courses[idx].code
        );
        MoveOutcome { from, to, swapped }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::PlannerError, fixtures::state, semester::Term};

    fn counts(state: &PlanningState, id: &str) -> Vec<(u32, u32)> {
        state
            .course(id)
            .unwrap()
            .sections
            .iter()
            .map(|s| (s.fall_count, s.spring_count))
            .collect()
    }

    #[test]
    fn test_drag_to_even_lane_swaps() {
        let mut state = state();
        let x = Semester::new(4).unwrap().lane_x() + 40.0;

        let outcome = state.move_course("c151", x, 120.0).unwrap();
        assert_eq!(outcome.from.get(), 1);
        assert_eq!(outcome.to.get(), 4);
        assert!(outcome.swapped);

        assert_eq!(counts(&state, "c151"), vec![(0, 2)]);
        let course = state.course("c151").unwrap();
        assert_eq!(course.sections[0].sem, Term::Spring);
        assert_eq!((course.x, course.y), (x, 120.0));
    }

    #[test]
    fn test_same_parity_keeps_sections() {
        let mut state = state();
        let outcome = state
            .set_semester("c151", Semester::new(3).unwrap())
            .unwrap();

        assert!(!outcome.swapped);
        assert_eq!(counts(&state, "c151"), vec![(2, 0)]);
    }

    #[test]
    fn test_boundary_semester_never_swaps() {
        let mut state = state();
        let six = Semester::BOUNDARY;

        assert!(!state.set_semester("c151", six).unwrap().swapped);
        assert_eq!(counts(&state, "c151"), vec![(2, 0)]);

        assert!(!state.set_semester("c151", Semester::new(7).unwrap()).unwrap().swapped);
        assert_eq!(counts(&state, "c151"), vec![(2, 0)]);
    }

    #[test]
    fn test_semester_stays_in_range() {
        let mut state = state();

        state.move_course("c152", -500.0, 0.0).unwrap();
        assert_eq!(state.course("c152").unwrap().sem.get(), 1);
        assert_eq!(state.course("c152").unwrap().x, 0.0);

        state.move_course("c152", 50_000.0, 0.0).unwrap();
        assert_eq!(state.course("c152").unwrap().sem.get(), 8);
    }

    #[test]
    fn test_non_finite_drop_survives_export() {
        let mut state = state();

        let outcome = state.move_course("c151", f64::INFINITY, f64::NAN).unwrap();
        assert_eq!(outcome.to.get(), 8);
        let course = state.course("c151").unwrap();
        assert_eq!(course.x, Semester::new(8).unwrap().lane_x() + 10.0);
        assert_eq!(course.y, 0.0);

        state.move_course("c152", f64::NAN, f64::NEG_INFINITY).unwrap();
        let course = state.course("c152").unwrap();
        assert_eq!(course.sem.get(), 1);
        assert!(course.x.is_finite() && course.y.is_finite());

        let exported = state.export_json().unwrap();
        let mut restored = state.clone();
        restored.reset();
        restored.restore_json(&exported).unwrap();
        assert_eq!(restored.snapshot(), state.snapshot());
    }

    #[test]
    fn test_bound_slot_realigns_elective() {
        let mut state = state();
        state.assign("slot3", "is1").unwrap();

        state
            .set_semester("slot3", Semester::new(4).unwrap())
            .unwrap();
        let entry = state.elective("is1").unwrap();
        assert_eq!(entry.sections[0].fall_count, 0);
        assert_eq!(entry.sections[0].spring_count, 1);

        state
            .set_semester("slot3", Semester::new(5).unwrap())
            .unwrap();
        let entry = state.elective("is1").unwrap();
        assert_eq!(entry.sections[0].fall_count, 1);
        assert_eq!(entry.sections[0].spring_count, 0);
    }

    #[test]
    fn test_move_unknown_course() {
        let mut state = state();
        assert!(matches!(
            state.move_course("ghost", 0.0, 0.0),
            Err(PlannerError::CourseNotFound(_))
        ));
    }
}
