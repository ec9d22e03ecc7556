//! Transient selection set for bulk remove/toggle actions
//!
//! Remove and toggle are keyed case-insensitively, so dispatching the same
//! key twice in one invocation would apply the mutation twice (a double
//! toggle is a net no-op). The selection deduplicates keys before dispatch.
//! It lives for one invocation only and is never part of the store.

/// Order-preserving, case-insensitively deduplicated set of model keys
#[derive(Debug, Default)]
pub struct Selection {
    keys: Vec<String>,
}

impl Selection {
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selection = Self::default();
        for key in keys {
            selection.insert(key.into());
        }
        selection
    }

    fn insert(&mut self, key: String) {
        let folded = key.to_lowercase();
        if !self.keys.iter().any(|k| k.to_lowercase() == folded) {
            self.keys.push(key);
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_is_case_insensitive() {
        let selection = Selection::from_keys(["Civic", "civic", "CIVIC", "Camry"]);
        let keys: Vec<_> = selection.keys().collect();
        assert_eq!(keys, ["Civic", "Camry"]);
    }

    #[test]
    fn test_preserves_first_spelling_and_order() {
        let selection = Selection::from_keys(["f150", "Camry", "F150"]);
        let keys: Vec<_> = selection.keys().collect();
        assert_eq!(keys, ["f150", "Camry"]);
    }

    #[test]
    fn test_empty_input_yields_no_keys() {
        let selection = Selection::from_keys(Vec::<String>::new());
        assert_eq!(selection.keys().count(), 0);
    }
}
