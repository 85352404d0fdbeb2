use planner::{PlanningState, Term};

/// Plain-text overview of a board: credit totals per lane, course counts by
/// kind, IS slot fill and professor loads
pub fn render_summary(state: &PlanningState) -> String {
    let mut lines = Vec::new();

    let totals = state.semester_totals();
    for lane in &totals.semesters {
        lines.push(format!(
            "Semester {} ({}): {} credits, {} ECTS",
            lane.semester,
            lane.semester.season(),
            lane.credits,
            lane.ects
        ));
    }
    lines.push(format!("Total: {} credits, {} ECTS", totals.credits, totals.ects));
    lines.push(String::new());

    for (kind, count) in state.overview().by_kind {
        lines.push(format!("{}: {count}", kind.label()));
    }
    let fill = state.slot_fill();
    lines.push(format!(
        "IS slots filled: {}/{} ({:.0}%)",
        fill.filled,
        fill.total,
        fill.ratio() * 100.0
    ));
    lines.push(String::new());

    for load in state.professor_loads() {
        lines.push(format!(
            "{}: {} {}, {} {}, {} total{}",
            load.name,
            load.fall,
            Term::Fall.as_str(),
            load.spring,
            Term::Spring.as_str(),
            load.total(),
            if load.over_capacity() { "  OVERLOAD" } else { "" }
        ));
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::catalog;

    #[test]
    fn test_summary_lines() {
        let mut state = PlanningState::initialize(catalog());
        let text = render_summary(&state);
        let has = |line: &str| text.lines().any(|l| l == line);

        assert!(has("Semester 1 (Fall): 3 credits, 6 ECTS"));
        assert!(has("Semester 6 (Spring (Intern.)): 0 credits, 0 ECTS"));
        assert!(has("CTIS: 1"));
        assert!(has("IS Elective Slot: 1"));
        assert!(has("IS slots filled: 0/1 (0%)"));
        assert!(has("Ayse Demir: 2 fall, 1 spring, 3 total"));

        state.assign("slot3", "is1").unwrap();
        let text = render_summary(&state);
        assert!(text.lines().any(|l| l == "IS slots filled: 1/1 (100%)"));
    }
}
