use indexmap::IndexMap;

/// The attributes set on an element:
/// `name="value"`
///
/// Names are unique. Setting a name that already exists replaces its value but keeps
/// its original position, so iteration follows the order names first appeared in.
///
/// Equality ignores order: two sets are equal if they map the same names to the same values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(IndexMap<String, String>);
impl Attributes {
    /// Create an empty attribute set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, replacing the value of an existing one with the same name.
    /// Returns the previous value, if any.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), value.into())
    }

    /// Get the value of an attribute by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Remove an attribute by name, returning its value.
    /// The remaining attributes keep their order.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.0.shift_remove(name)
    }

    /// Returns true if an attribute with this name is set.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Returns the number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return true if len == 0
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut attributes = Self::new();
        attributes.extend(iter);
        attributes
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Attributes {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins_in_place() {
        let mut attributes = Attributes::new();
        attributes.insert("x", "1");
        attributes.insert("y", "2");
        assert_eq!(attributes.insert("x", "3"), Some("1".to_string()));

        assert_eq!(attributes.get("x"), Some("3"));
        assert_eq!(
            attributes.iter().collect::<Vec<_>>(),
            vec![("x", "3"), ("y", "2")]
        );
    }

    #[test]
    fn test_remove() {
        let mut attributes: Attributes = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(attributes.remove("a"), Some("1".to_string()));
        assert_eq!(attributes.remove("a"), None);
        assert!(!attributes.contains("a"));
        assert_eq!(attributes.len(), 1);
    }

    #[test]
    fn test_equality_ignores_order() {
        let a: Attributes = [("a", "1"), ("b", "2")].into_iter().collect();
        let b: Attributes = [("b", "2"), ("a", "1")].into_iter().collect();
        let c: Attributes = [("a", "1"), ("b", "3")].into_iter().collect();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, Attributes::new());
    }

    #[test]
    fn test_borrowed_into_iter() {
        let attributes: Attributes = [("k", "v")].into_iter().collect();
        for (name, value) in &attributes {
            assert_eq!((name.as_str(), value.as_str()), ("k", "v"));
        }
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut attributes: Attributes = [("a", "1"), ("b", "2"), ("c", "3")].into_iter().collect();
        attributes.remove("a");
        assert_eq!(
            attributes.iter().collect::<Vec<_>>(),
            vec![("b", "2"), ("c", "3")]
        );
    }

    #[test]
    fn test_many_attributes() {
        let mut attributes: Attributes = (0..10_000).map(|i| (format!("a{i}"), i.to_string())).collect();
        attributes.insert("a0", "first");
        attributes.insert("a9999", "last");

        assert_eq!(attributes.len(), 10_000);
        assert_eq!(attributes.iter().next(), Some(("a0", "first")));
        assert_eq!(attributes.get("a9999"), Some("last"));
        assert_eq!(attributes.get("a5000"), Some("5000"));
    }
}
