// Capability-token permission checks.
//
// The permission set is handed in by the caller; nothing here reads from
// storage or global state.
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Set of capability tokens such as `"invoice.create"`.
///
/// `"invoice.*"` grants every `invoice.` capability and `"*"` grants everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet {
    tokens: BTreeSet<String>,
}

impl PermissionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grant(&mut self, token: impl Into<String>) {
        self.tokens.insert(token.into());
    }

    pub fn revoke(&mut self, token: &str) -> bool {
        self.tokens.remove(token)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn can(&self, capability: &str) -> bool {
        if self.tokens.contains(capability) || self.tokens.contains("*") {
            return true;
        }
        // Walk up the dotted path: "invoice.line.edit" -> "invoice.line.*" -> "invoice.*".
        let mut prefix = capability;
        while let Some((parent, _)) = prefix.rsplit_once('.') {
            if self.tokens.contains(&format!("{parent}.*")) {
                return true;
            }
            prefix = parent;
        }
        false
    }

    pub fn can_any<'a>(&self, capabilities: impl IntoIterator<Item = &'a str>) -> bool {
        capabilities.into_iter().any(|c| self.can(c))
    }

    /// True for an empty requirement list.
    pub fn can_all<'a>(&self, capabilities: impl IntoIterator<Item = &'a str>) -> bool {
        capabilities.into_iter().all(|c| self.can(c))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().map(Into::into).collect(),
        }
    }
}
