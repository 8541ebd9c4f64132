//! Per-case failure fields.

use crate::format::truncate;
use crate::model::SuiteResult;
use crate::payload::Field;

/// Failure text longer than this is cut.
pub const MAX_FAILURE_CHARS: usize = 150;

/// One bare field per failing case, in case order.
pub fn failure_fields(suite: &SuiteResult) -> Vec<Field> {
    suite
        .cases
        .iter()
        .filter(|c| c.status.is_fail())
        .map(|c| {
            Field::bare(format!(
                "*Test*: {}\n*Error*: {}",
                c.name,
                truncate(c.failure_text(), MAX_FAILURE_CHARS)
            ))
        })
        .collect()
}
