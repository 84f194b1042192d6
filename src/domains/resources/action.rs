//! The fixed set of resource actions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::host::Method;

/// A conventional resource action.
///
/// Variant order is registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Escape hatch bound to every verb.
    All,
    Index,
    New,
    Create,
    Show,
    Edit,
    Update,
    Destroy,
}

impl Action {
    /// Every action, in the order routes are registered.
    pub const ORDERED: [Action; 8] = [
        Action::All,
        Action::Index,
        Action::New,
        Action::Create,
        Action::Show,
        Action::Edit,
        Action::Update,
        Action::Destroy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Index => "index",
            Self::New => "new",
            Self::Create => "create",
            Self::Show => "show",
            Self::Edit => "edit",
            Self::Update => "update",
            Self::Destroy => "destroy",
        }
    }

    /// Verb the action is registered with.
    pub fn method(self) -> Method {
        match self {
            Self::All => Method::Any,
            Self::Index | Self::New | Self::Show | Self::Edit => Method::Get,
            Self::Create => Method::Post,
            Self::Update => Method::Put,
            Self::Destroy => Method::Delete,
        }
    }

    /// Whether the path addresses a single member (carries the id parameter).
    pub fn is_member(self) -> bool {
        matches!(
            self,
            Self::All | Self::Show | Self::Edit | Self::Update | Self::Destroy
        )
    }

    /// Whether the action name appears as a literal path segment.
    pub fn has_named_segment(self) -> bool {
        matches!(self, Self::New | Self::Edit)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a key does not name a known action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAction(pub String);

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ORDERED
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verb_table() {
        let verbs: Vec<_> = Action::ORDERED.iter().map(|a| a.method()).collect();
        assert_eq!(
            verbs,
            vec![
                Method::Any,
                Method::Get,
                Method::Get,
                Method::Post,
                Method::Get,
                Method::Get,
                Method::Put,
                Method::Delete,
            ]
        );
    }

    #[test]
    fn test_parse_names() {
        for action in Action::ORDERED {
            assert_eq!(action.as_str().parse::<Action>(), Ok(action));
        }
        assert_eq!(
            "publish".parse::<Action>(),
            Err(UnknownAction("publish".to_string()))
        );
        // Names are case-sensitive, like the keys of a controller definition.
        assert!("Index".parse::<Action>().is_err());
    }

    #[test]
    fn test_ordered_matches_ord() {
        let mut sorted = Action::ORDERED;
        sorted.sort();
        assert_eq!(sorted, Action::ORDERED);
    }
}
