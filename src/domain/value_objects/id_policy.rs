//! Role id assignment policy
//!
//! - `Count`: new id is `number of roles + 1`. Deleting a role and
//!   adding another can hand out an id that is still in use.
//! - `Monotonic`: a persisted counter that only grows, independent of how
//!   many roles exist.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdPolicy {
    #[default]
    #[serde(alias = "count-plus-one")]
    Count,
    Monotonic,
}

impl IdPolicy {
    /// Compute the id for the next role.
    ///
    /// `counter` is the persisted next id for the monotonic policy; when it is
    /// missing (state written under the count policy) the counter starts past
    /// the largest existing id.
    pub fn next_id(&self, existing: &[u32], counter: Option<u32>) -> u32 {
        match self {
            IdPolicy::Count => existing.len() as u32 + 1,
            IdPolicy::Monotonic => {
                let past_max = existing.iter().copied().max().unwrap_or(0) + 1;
                counter.map_or(past_max, |c| c.max(past_max))
            }
        }
    }
}

impl std::fmt::Display for IdPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdPolicy::Count => write!(f, "count"),
            IdPolicy::Monotonic => write!(f, "monotonic"),
        }
    }
}

impl FromStr for IdPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "count" | "count-plus-one" => Ok(IdPolicy::Count),
            "monotonic" => Ok(IdPolicy::Monotonic),
            other => Err(format!(
                "unknown id policy '{}' (expected count or monotonic)",
                other
            )),
        }
    }
}
