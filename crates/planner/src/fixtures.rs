//! Shared test data: a small board with two IS slots and a three-entry catalog

use crate::{
    course::Course,
    semester::Semester,
    snapshot::CatalogPayload,
    state::PlanningState,
};
use serde_json::json;

pub fn course(id: &str, code: &str, sem: u8) -> Course {
    let mut course = Course::blank(id.to_string());
    course.code = code.to_string();
    course.sem = Semester::new(sem).unwrap();
    course.orig_sem = course.sem;
    course
}

pub fn catalog() -> CatalogPayload {
    serde_json::from_value(json!({
        "professors": [
            { "id": "p1", "name": "Ayse Demir", "dept": "CTIS" },
            { "id": "p2", "name": "John Smith", "dept": "CTIS" },
            { "id": "p3", "name": "Maria Rossi", "dept": "MATH" }
        ],
        "courses": [
            {
                "id": "c151", "code": "CTIS 151", "short": "151", "name": "Intro to Programming",
                "type": "ctis", "sem": 1, "origSem": 1, "x": 18, "y": 100,
                "credits": 3, "ects": 6, "offered": "fall",
                "prereqs": [],
                "sections": [{ "profId": "p1", "sem": "fall", "fallCount": 2, "springCount": 0 }]
            },
            {
                "id": "c152", "code": "CTIS 152", "short": "152", "name": "Data Structures",
                "type": "ctis", "sem": 2, "origSem": 2, "x": 208, "y": 100,
                "credits": 4, "ects": 7, "offered": "spring",
                "prereqs": ["c151"],
                "sections": [{ "profId": "p1", "sem": "spring", "fallCount": 0, "springCount": 1 }]
            },
            {
                "id": "m101", "code": "MATH 101", "short": "M101", "name": "Calculus I",
                "type": "non-ctis", "sem": 1, "origSem": 1, "x": 18, "y": 180,
                "credits": 4, "ects": 6, "offered": "both",
                "prereqs": [],
                "sections": [{ "profId": "p3", "sem": "both", "fallCount": 1, "springCount": 1 }]
            },
            {
                "id": "slot3", "code": "IS ELEC 1", "short": "ISE1", "name": "IS Elective I",
                "type": "is-elective", "sem": 3, "origSem": 3, "x": 398, "y": 100,
                "credits": 3, "ects": 5, "offered": "both",
                "prereqs": ["c151"], "sections": [], "slotAssigned": null
            },
            {
                "id": "slot4", "code": "IS ELEC 2", "short": "ISE2", "name": "IS Elective II",
                "type": "is-elective", "sem": 4, "origSem": 4, "x": 588, "y": 100,
                "credits": 3, "ects": 5, "offered": "both",
                "prereqs": [], "sections": [], "slotAssigned": null
            },
            {
                "id": "free7", "code": "FREE ELEC", "short": "FE", "name": "Free Elective",
                "type": "slot", "sem": 7, "origSem": 7, "x": 1148, "y": 100,
                "credits": 3, "ects": 5, "offered": "both",
                "prereqs": [], "sections": []
            }
        ],
        "isElectives": [
            {
                "id": "is1", "code": "IS 301", "short": "IS301", "name": "Information Ethics",
                "credits": 3, "ects": 5,
                "prereqCodes": "CTIS 151, MATH 101 OR MATH 105",
                "sections": [{ "profId": "p2", "sem": "fall", "fallCount": 1, "springCount": 0 }]
            },
            {
                "id": "is2", "code": "IS 302", "short": "IS302", "name": "Digital Society",
                "credits": 3, "ects": 5,
                "prereqCodes": "CTIS 152",
                "sections": [{ "profId": "p2", "sem": "fall", "fallCount": 2, "springCount": 0 }]
            },
            {
                "id": "is3", "code": "IS 410", "short": "IS410", "name": "Health Informatics",
                "credits": 3, "ects": 5, "_origSem": 5,
                "sections": [{ "profId": "p3", "sem": "spring", "fallCount": 0, "springCount": 1 }]
            }
        ]
    }))
    .unwrap()
}

pub fn state() -> PlanningState {
    PlanningState::initialize(catalog())
}
