//! In-memory editing of the package list
//!
//! All operations treat package names as opaque strings: exact,
//! case-sensitive matching, no normalization, no dedup. Insertion order is
//! significant because it determines serialization order in the manifest.

/// An ordered list of package names.
///
/// Duplicates are allowed; appending the same name twice yields two entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageList(Vec<String>);

impl PackageList {
    /// Create an empty package list
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Build a list from the given names, preserving their order
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// The package names in serialization order
    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append names to the end of the list, in the order given
    pub fn append<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.extend(names.into_iter().map(Into::into));
    }

    /// Rewrite every entry equal to `original` to `replacement`, in place.
    ///
    /// Scans the whole list; returns whether at least one entry matched.
    /// A `false` return leaves the list unchanged.
    pub fn replace(&mut self, original: &str, replacement: &str) -> bool {
        let mut any_matches = false;

        for entry in &mut self.0 {
            if entry.as_str() == original {
                *entry = replacement.to_string();
                any_matches = true;
            }
        }

        any_matches
    }

    /// Remove every entry equal to `name`, preserving the relative order of
    /// the survivors. Removing an absent name is a no-op.
    pub fn remove(&mut self, name: &str) {
        self.0.retain(|entry| entry != name);
    }
}

impl From<Vec<String>> for PackageList {
    fn from(names: Vec<String>) -> Self {
        Self(names)
    }
}

impl<'a> IntoIterator for &'a PackageList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(names: &[&str]) -> PackageList {
        PackageList::from_names(names.iter().copied())
    }

    #[test]
    fn test_append_preserves_order() {
        let mut packages = list(&["a", "b"]);
        packages.append(["c", "d"]);
        assert_eq!(packages, list(&["a", "b", "c", "d"]));
    }

    #[test]
    fn test_append_does_not_dedup() {
        let mut packages = list(&["a"]);
        packages.append(["a"]);
        assert_eq!(packages, list(&["a", "a"]));
    }

    #[test]
    fn test_replace_rewrites_all_occurrences() {
        let mut packages = list(&["a", "b", "a"]);
        assert!(packages.replace("a", "z"));
        assert_eq!(packages, list(&["z", "b", "z"]));
    }

    #[test]
    fn test_replace_reports_no_match() {
        let mut packages = list(&["a", "b"]);
        assert!(!packages.replace("x", "z"));
        assert_eq!(packages, list(&["a", "b"]));
    }

    #[test]
    fn test_replace_is_exact_and_case_sensitive() {
        let mut packages = list(&["ripgrep", "Ripgrep", "rip"]);
        assert!(packages.replace("ripgrep", "rg"));
        assert_eq!(packages, list(&["rg", "Ripgrep", "rip"]));
    }

    #[test]
    fn test_remove_removes_all_occurrences() {
        let mut packages = list(&["a", "b", "a", "c"]);
        packages.remove("a");
        assert_eq!(packages, list(&["b", "c"]));
    }

    #[test]
    fn test_remove_absent_name_is_noop() {
        let mut packages = list(&["a", "b"]);
        packages.remove("z");
        assert_eq!(packages, list(&["a", "b"]));
    }
}
