use std::cmp::Ordering;

use crate::catalog::Program;

/// Ascending priority, programs without one last, ties by case-insensitive name.
pub fn compare_programs(left: &Program, right: &Program) -> Ordering {
    match (left.priority, right.priority) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
    .then_with(|| left.name.to_lowercase().cmp(&right.name.to_lowercase()))
}

pub(crate) fn sort_programs(programs: &mut [&Program]) {
    programs.sort_by(|left, right| compare_programs(left, right));
}
