use std::collections::BTreeSet;
use std::fmt;

use tracing::debug;

use crate::formula::{group, Formula};

/// A problem object. Identity is the `(name, type)` pair.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Object {
    name: String,
    object_type: String,
}

impl Object {
    pub fn new(name: &str, object_type: &str) -> Self {
        Self {
            name: name.to_string(),
            object_type: object_type.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Empty when the object is untyped
    pub fn object_type(&self) -> &str {
        &self.object_type
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.object_type.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} - {}", self.name, self.object_type)
        }
    }
}

/// Deduplicated set of objects, iterated in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectSet {
    objects: BTreeSet<Object>,
}

impl ObjectSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if an equal object was already registered.
    pub fn insert(&mut self, object: Object) -> bool {
        if self.objects.contains(&object) {
            debug!("Object '{}' already registered", object);
            return false;
        }
        self.objects.insert(object)
    }

    pub fn contains(&self, object: &Object) -> bool {
        self.objects.contains(object)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Object> {
        self.objects.iter()
    }

    /// The `(:objects ...)` section, one object per line.
    pub fn to_formula(&self) -> Formula {
        group(":objects", self.objects.iter().map(|o| o.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_display() {
        assert_eq!(Object::new("box", "block").to_string(), "box - block");
        assert_eq!(Object::new("table", "").to_string(), "table");
    }

    #[test]
    fn test_identity_is_name_and_type() {
        assert_eq!(Object::new("a", "t"), Object::new("a", "t"));
        assert_ne!(Object::new("a", "t"), Object::new("a", "u"));
        assert_ne!(Object::new("a", "t"), Object::new("a", ""));
    }

    #[test]
    fn test_insert_rejects_duplicates() {
        let mut objects = ObjectSet::new();
        assert!(objects.insert(Object::new("box", "block")));
        assert!(!objects.insert(Object::new("box", "block")));
        assert!(objects.insert(Object::new("box", "")));
        assert_eq!(objects.len(), 2);
    }

    #[test]
    fn test_iteration_is_sorted_by_name() {
        let mut objects = ObjectSet::new();
        objects.insert(Object::new("table", ""));
        objects.insert(Object::new("box", "block"));
        objects.insert(Object::new("apple", "fruit"));
        let names: Vec<&str> = objects.iter().map(Object::name).collect();
        assert_eq!(names, vec!["apple", "box", "table"]);
    }

    #[test]
    fn test_objects_section() {
        let mut objects = ObjectSet::new();
        objects.insert(Object::new("table", ""));
        objects.insert(Object::new("box", "block"));
        assert_eq!(
            objects.to_formula(),
            group(":objects", ["box - block", "table"])
        );
    }
}
