//! Enums shared across qbank crates.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A per-user set of question identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum UserList {
    Bookmarks,
    Done,
}

impl UserList {
    /// Return the string representation used in routes and log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bookmarks => "bookmarks",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for UserList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_route_segment() {
        assert_eq!(UserList::Bookmarks.to_string(), "bookmarks");
        assert_eq!(UserList::Done.to_string(), "done");
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&UserList::Bookmarks).unwrap();
        assert_eq!(json, "\"bookmarks\"");
    }
}
