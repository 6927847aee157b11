use serde_json::json;

use crate::catalog::{Institution, Program};

pub(super) fn alpha() -> Institution {
    serde_json::from_value(json!({
        "id": "alpha-u",
        "name": "Alpha U",
        "country": "Turkey",
        "type": "public",
        "description": "A research university on the Bosphorus.",
        "programs": [
            { "name": "Data Science", "degree": "master", "priority": 1 },
            { "name": "Art History", "degree": "bachelor" }
        ]
    }))
    .expect("alpha parses")
}

pub(super) fn catalog() -> Vec<Institution> {
    let rest: Vec<Institution> = serde_json::from_value(json!([
        {
            "id": "beta-college",
            "name": "Beta College",
            "country": "Spain",
            "type": "private",
            "description": "Small liberal arts college known for data journalism.",
            "programs": [
                { "name": "Journalism", "degree": "Bachelor", "priority": 2 },
                { "name": "Economics", "degree": "PhD", "priority": 1 }
            ]
        },
        {
            "id": "gamma-institute",
            "name": "Gamma Institute of Technology",
            "country": "United Kingdom",
            "type": "public",
            "description": "",
            "programs": [
                { "name": "Computer Science", "degree": "Master" },
                { "name": "Applied Data Engineering", "degree": "bachelor" }
            ]
        },
        {
            "id": "delta-academy",
            "name": "Delta Academy",
            "country": "turkey",
            "type": "private"
        }
    ]))
    .expect("catalog parses");

    let mut institutions = vec![alpha()];
    institutions.extend(rest);
    institutions
}

pub(super) fn program(name: &str, priority: Option<i32>) -> Program {
    serde_json::from_value(json!({
        "name": name,
        "degree": "master",
        "priority": priority
    }))
    .expect("program parses")
}

pub(super) fn ids(results: &[crate::matching::MatchResult<'_>]) -> Vec<String> {
    results
        .iter()
        .map(|result| result.institution.id.clone())
        .collect()
}
