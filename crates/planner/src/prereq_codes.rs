use crate::course::Course;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref OR_SEPARATOR: Regex = Regex::new(r"(?i)\bor\b").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// A required prerequisite, satisfied by any one of its alternative codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeGroup(pub Vec<String>);

impl CodeGroup {
    /// Finds the first alternative that names a course on the board other
    /// than `exclude`
    pub fn resolve<'a>(&self, courses: &'a [Course], exclude: &str) -> Option<&'a Course> {
        self.0.iter().find_map(|code| {
            courses
                .iter()
                .find(|c| c.code == *code && c.id != exclude)
        })
    }
}

/// Parses a textual prerequisite list into required groups.
///
/// Groups are separated by commas; alternatives inside a group by the word
/// `OR` in any case. Runs of whitespace inside a code collapse to one space.
pub fn parse_prerequisite_codes(text: &str) -> Vec<CodeGroup> {
    text.split(',')
        .map(str::trim)
        .filter(|group| !group.is_empty())
        .map(|group| {
            CodeGroup(
                OR_SEPARATOR
                    .split(group)
                    .map(|code| WHITESPACE.replace_all(code.trim(), " ").into_owned())
                    .filter(|code| !code.is_empty())
                    .collect(),
            )
        })
        .filter(|group| !group.0.is_empty())
        .collect()
}

/// Resolves prerequisite codes to board course ids.
///
/// Each group contributes the id of its first matching alternative; groups
/// with no match are dropped. `exclude` is never returned, and the result
/// holds no duplicates.
pub fn resolve_prerequisite_ids(text: &str, courses: &[Course], exclude: &str) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new();

    for group in parse_prerequisite_codes(text) {
        if let Some(course) = group.resolve(courses, exclude)
            && !ids.contains(&course.id)
        {
            ids.push(course.id.clone());
        }
    }

    ids
}

/// Renders prerequisite ids back into the textual code form
pub fn render_prerequisite_codes(ids: &[String], courses: &[Course]) -> String {
    ids.iter()
        .map(|id| {
            courses
                .iter()
                .find(|c| c.id == *id)
                .map_or(id.as_str(), |c| c.code.as_str())
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::course;

    #[test]
    fn test_parse_groups_and_alternatives() {
        let groups = parse_prerequisite_codes("CTIS 151, MATH 101 OR MATH  105 ,, ");
        assert_eq!(
            groups,
            vec![
                CodeGroup(vec!["CTIS 151".into()]),
                CodeGroup(vec!["MATH 101".into(), "MATH 105".into()]),
            ]
        );
    }

    #[test]
    fn test_parse_or_is_case_insensitive_whole_word() {
        let groups = parse_prerequisite_codes("CTIS 151 or CORE 101");
        assert_eq!(
            groups,
            vec![CodeGroup(vec!["CTIS 151".into(), "CORE 101".into()])]
        );
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_prerequisite_codes("").is_empty());
        assert!(parse_prerequisite_codes(" , ").is_empty());
    }

    #[test]
    fn test_resolve_first_match_per_group() {
        let courses = vec![
            course("a", "MATH 105", 1),
            course("b", "MATH 101", 1),
            course("c", "CTIS 151", 1),
        ];

        let ids = resolve_prerequisite_ids(
            "CTIS 151, MATH 101 OR MATH 105, HIST 200, CTIS 151",
            &courses,
            "slot",
        );
        assert_eq!(ids, vec!["c".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_resolve_excludes_self() {
        let courses = vec![course("s", "IS 300", 3), course("c", "CTIS 151", 1)];
        let ids = resolve_prerequisite_ids("IS 300, CTIS 151", &courses, "s");
        assert_eq!(ids, vec!["c".to_string()]);
    }

    #[test]
    fn test_resolve_skips_self_within_group() {
        let courses = vec![course("s", "IS ELEC 1", 3), course("c", "CTIS 151", 1)];
        let ids = resolve_prerequisite_ids("IS ELEC 1 OR CTIS 151", &courses, "s");
        assert_eq!(ids, vec!["c".to_string()]);
    }

    #[test]
    fn test_render_codes() {
        let courses = vec![course("a", "CTIS 151", 1)];
        let text = render_prerequisite_codes(&["a".into(), "gone".into()], &courses);
        assert_eq!(text, "CTIS 151, gone");
    }
}
