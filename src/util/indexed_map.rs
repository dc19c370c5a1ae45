use std::collections::HashMap;
use std::ops::Index;

/// A map from `String` to `T`, that also associates a `usize` with each element for faster
/// lookups. Ids are handed out in insertion order, starting at 0.
#[derive(Debug, Clone)]
pub struct IndexedMap<T> {
    map: HashMap<String, usize>,
    values: Vec<T>,
}

impl<T> IndexedMap<T> {
    pub fn new() -> IndexedMap<T> {
        IndexedMap {
            map: HashMap::new(),
            values: Vec::new(),
        }
    }

    /// Inserts name->value into this map. If the name was already present, the map is left
    /// unchanged and the name is returned as the error.
    pub fn insert(&mut self, name: String, value: T) -> Result<usize, String> {
        if self.map.contains_key(&name) {
            return Err(name);
        }
        let new_id = self.values.len();
        self.values.push(value);
        self.map.insert(name, new_id);
        Ok(new_id)
    }

    pub fn get(&self, id: usize) -> Option<&T> {
        self.values.get(id)
    }

    pub fn get_by_name(&self, name: &str) -> Option<&T> {
        Some(&self.values[*self.map.get(name)?])
    }

    pub fn id(&self, name: &str) -> Option<usize> {
        self.map.get(name).copied()
    }

    /// Iterate over the values in insertion order.
    pub fn values(&self) -> impl ExactSizeIterator<Item = &T> {
        self.values.iter()
    }

    /// Consume the map, yielding the values in insertion order.
    pub fn into_values(self) -> impl ExactSizeIterator<Item = T> {
        self.values.into_iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<T> Default for IndexedMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<&str> for IndexedMap<T> {
    type Output = T;

    fn index(&self, name: &str) -> &T {
        &self.values[self.map[name]]
    }
}

impl<T> Index<usize> for IndexedMap<T> {
    type Output = T;

    fn index(&self, id: usize) -> &T {
        &self.values[id]
    }
}

impl<T> IntoIterator for &IndexedMap<T> {
    type Item = usize;
    type IntoIter = std::ops::Range<usize>;

    fn into_iter(self) -> Self::IntoIter {
        0..self.values.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_assigns_ids_in_order() {
        let mut map = IndexedMap::new();
        assert_eq!(map.insert("b".to_owned(), 'b'), Ok(0));
        assert_eq!(map.insert("a".to_owned(), 'a'), Ok(1));
        assert_eq!(map.id("a"), Some(1));
        assert_eq!(map["b"], 'b');
        assert_eq!(map[1], 'a');
        assert_eq!(map.values().copied().collect::<String>(), "ba");
        assert_eq!((&map).into_iter().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn test_insert_rejects_duplicate() {
        let mut map = IndexedMap::new();
        map.insert("x".to_owned(), 1).unwrap();
        assert_eq!(map.insert("x".to_owned(), 2), Err("x".to_owned()));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get_by_name("x"), Some(&1));
    }
}
