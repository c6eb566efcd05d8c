use indexmap::IndexMap;
use std::hash::Hash;

/// 按键归并的保序映射：重复键后写覆盖前写，但键保留首次出现的位置。
///
/// 标签 label 在多篇文章中重复出现时用它收敛成唯一记录。
#[derive(Debug, Clone)]
pub struct LastWriteWins<K, V> {
    entries: IndexMap<K, V>,
}

impl<K: Hash + Eq, V> LastWriteWins<K, V> {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// 写入一条记录，返回被覆盖的旧值
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K: Hash + Eq, V> Default for LastWriteWins<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for LastWriteWins<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut reduced = Self::new();
        for (k, v) in iter {
            reduced.insert(k, v);
        }
        reduced
    }
}

impl<K, V> IntoIterator for LastWriteWins<K, V> {
    type Item = (K, V);
    type IntoIter = indexmap::map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_value_wins_but_position_is_kept() {
        let reduced: LastWriteWins<&str, u32> =
            [("a", 1), ("b", 2), ("a", 3), ("c", 4)].into_iter().collect();

        assert_eq!(reduced.keys().copied().collect::<Vec<_>>(), ["a", "b", "c"]);
        assert_eq!(reduced.iter().next(), Some((&"a", &3)));
        assert_eq!(reduced.len(), 3);
    }

    #[test]
    fn insert_returns_replaced_value() {
        let mut reduced = LastWriteWins::new();
        assert_eq!(reduced.insert("x", "first"), None);
        assert_eq!(reduced.insert("x", "second"), Some("first"));
        assert_eq!(reduced.len(), 1);
    }
}
