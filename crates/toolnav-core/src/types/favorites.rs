//! Favorite tools, in the order they were added

use super::tool::ToolId;

/// Insertion-ordered set of favorite tool ids
///
/// The persisted form is the id array in set order. Toggling the same id
/// twice in a row leaves both the set and its order unchanged: a removed id
/// that comes straight back returns to its old position.
#[derive(Debug, Clone, Default)]
pub struct FavoriteSet {
    ids: Vec<ToolId>,
    last_removed: Option<(ToolId, usize)>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set from stored ids; later duplicates are dropped
    pub fn from_ids(stored: impl IntoIterator<Item = ToolId>) -> Self {
        let mut ids: Vec<ToolId> = Vec::new();
        for id in stored {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        Self { ids, last_removed: None }
    }

    /// Flip membership; returns whether `id` is a favorite afterwards
    pub fn toggle(&mut self, id: &ToolId) -> bool {
        if let Some(pos) = self.ids.iter().position(|f| f == id) {
            self.ids.remove(pos);
            self.last_removed = Some((id.clone(), pos));
            return false;
        }

        match self.last_removed.take() {
            Some((removed, pos)) if removed == *id => self.ids.insert(pos.min(self.ids.len()), id.clone()),
            _ => self.ids.push(id.clone()),
        }
        true
    }

    pub fn contains(&self, id: &ToolId) -> bool {
        self.ids.contains(id)
    }

    pub fn ids(&self) -> &[ToolId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl PartialEq for FavoriteSet {
    fn eq(&self, other: &Self) -> bool {
        self.ids == other.ids
    }
}

impl Eq for FavoriteSet {}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(ids: &[u64]) -> FavoriteSet {
        FavoriteSet::from_ids(ids.iter().map(|&i| ToolId::from(i)))
    }

    #[test]
    fn test_keeps_stored_order() {
        let favorites = set(&[5, 2, 5, 9]);
        assert_eq!(favorites.ids(), [ToolId::from(5u64), ToolId::from(2u64), ToolId::from(9u64)]);
    }

    #[test]
    fn test_new_ids_append() {
        let mut favorites = set(&[5, 2]);
        assert!(favorites.toggle(&ToolId::from(1u64)));
        assert_eq!(favorites.ids(), [ToolId::from(5u64), ToolId::from(2u64), ToolId::from(1u64)]);
        assert!(!favorites.toggle(&ToolId::from(1u64)));
        assert_eq!(favorites, set(&[5, 2]));
    }

    #[test]
    fn test_removed_id_returns_to_its_place() {
        let mut favorites = set(&[5, 2, 9]);
        assert!(!favorites.toggle(&ToolId::from(5u64)));
        assert!(favorites.toggle(&ToolId::from(5u64)));
        assert_eq!(favorites, set(&[5, 2, 9]));
    }

    #[test]
    fn test_other_toggles_in_between_append() {
        let mut favorites = set(&[5, 2]);
        favorites.toggle(&ToolId::from(5u64));
        favorites.toggle(&ToolId::from(7u64));
        favorites.toggle(&ToolId::from(5u64));
        assert_eq!(favorites, set(&[2, 7, 5]));
    }
}
