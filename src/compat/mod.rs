pub mod love;
pub mod wealth;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

/// Whether `(a, b)` appears in `table` in either order.
pub fn pair_matches(table: &[(u32, u32)], a: u32, b: u32) -> bool {
    table
        .iter()
        .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
}

/// Looks up an unordered pair in a keyed table.
pub(crate) fn pair_lookup<T: Copy>(table: &[((u32, u32), T)], a: u32, b: u32) -> Option<T> {
    table
        .iter()
        .find(|((x, y), _)| (*x == a && *y == b) || (*x == b && *y == a))
        .map(|(_, value)| *value)
}
