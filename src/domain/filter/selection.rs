use serde::Serialize;

/// Duplicate-free collection of selected facet values.
///
/// Equality is membership-based: two selections holding the same values in a
/// different order are equal. Insertion order is kept so that "the first
/// selected value" is deterministic.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct SelectionSet<T> {
    items: Vec<T>,
}

impl<T> SelectionSet<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First value in insertion order.
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: PartialEq> SelectionSet<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }

    /// Returns `false` when the value was already selected.
    pub fn insert(&mut self, value: T) -> bool {
        if self.contains(&value) {
            return false;
        }
        self.items.push(value);
        true
    }

    /// Returns `true` when the value was present.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.items.iter().position(|item| item == value) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Flip membership; returns whether the value is selected afterwards.
    pub fn toggle(&mut self, value: T) -> bool {
        if self.remove(&value) {
            false
        } else {
            self.items.push(value);
            true
        }
    }
}

impl<T> Default for SelectionSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for SelectionSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.items.iter().all(|item| other.contains(item))
    }
}

impl<T: Eq> Eq for SelectionSet<T> {}

impl<T: PartialEq> FromIterator<T> for SelectionSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl<T: PartialEq> Extend<T> for SelectionSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a SelectionSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
