//! Insertion-ordered class-name set.
//!
//! Class lists are semantically unordered but hosts expose them
//! order-preserving, so membership uses set semantics while iteration keeps
//! first-seen order. Backed by a `SmallVec`; class lists are almost always
//! short.

use smallvec::SmallVec;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassSet(SmallVec<[String; 4]>);

impl ClassSet {
    #[inline]
    pub const fn new() -> Self {
        Self(SmallVec::new_const())
    }

    /// Insert `name` unless already present. Returns whether it was inserted.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.0.push(name);
        true
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|existing| existing == name)
    }

    /// Remove `name` if present, keeping the order of the rest. Returns
    /// whether it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.0.iter().position(|existing| existing == name) {
            Some(index) => {
                self.0.remove(index);
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl FromIterator<String> for ClassSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = Self::new();
        for name in iter {
            set.insert(name);
        }
        set
    }
}

impl<'set> IntoIterator for &'set ClassSet {
    type Item = &'set String;
    type IntoIter = std::slice::Iter<'set, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for ClassSet {
    type Item = String;
    type IntoIter = smallvec::IntoIter<[String; 4]>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
