use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use crate::models::{Event, EventCategory, Reaction, UserProfile};
use crate::services::store::{EventStore, StoreError};

/// In-process event store
///
/// Built once with the `with_*` methods and read-only afterwards. Events
/// are enumerated in insertion order, categories are looked up by name in
/// insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    users: HashMap<i64, UserProfile>,
    categories: Vec<EventCategory>,
    events: Vec<Event>,
    reactions: Vec<(i64, i64, Reaction)>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, user: UserProfile) -> Self {
        self.users.insert(user.user_id, user);
        self
    }

    pub fn with_category(mut self, category: EventCategory) -> Self {
        self.categories.push(category);
        self
    }

    /// Add an event; its category is registered too if not yet known
    pub fn with_event(mut self, event: Event) -> Self {
        if !self.categories.iter().any(|c| c.id == event.category.id) {
            self.categories.push(event.category.clone());
        }
        self.events.push(event);
        self
    }

    pub fn with_reaction(mut self, user_id: i64, event_id: i64, reaction: Reaction) -> Self {
        self.reactions.push((user_id, event_id, reaction));
        self
    }
}

#[async_trait]
impl EventStore for MemoryStore {
    async fn get_user(&self, user_id: i64) -> Result<Option<UserProfile>, StoreError> {
        Ok(self.users.get(&user_id).cloned())
    }

    async fn find_category_by_name(&self, name: &str) -> Result<Option<EventCategory>, StoreError> {
        Ok(self.categories.iter().find(|c| c.name == name).cloned())
    }

    async fn active_events(
        &self,
        category_id: i64,
        on_or_after: NaiveDate,
    ) -> Result<Vec<Event>, StoreError> {
        Ok(self
            .events
            .iter()
            .filter(|e| e.category.id == category_id && e.end_date >= on_or_after)
            .cloned()
            .collect())
    }

    async fn reactions(
        &self,
        user_id: i64,
        event_ids: &[i64],
    ) -> Result<HashMap<i64, Reaction>, StoreError> {
        let mut found: HashMap<i64, Reaction> = HashMap::new();

        for (uid, event_id, reaction) in &self.reactions {
            if *uid == user_id && event_ids.contains(event_id) {
                let merged = Reaction::merge(found.get(event_id).copied(), *reaction);
                found.insert(*event_id, merged);
            }
        }

        Ok(found)
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reactions_filtered_by_user_and_event() {
        let store = MemoryStore::new()
            .with_reaction(1, 10, Reaction::Like)
            .with_reaction(2, 10, Reaction::Dislike)
            .with_reaction(1, 11, Reaction::Dislike)
            .with_reaction(1, 12, Reaction::Like);

        let reactions = tokio_test::block_on(store.reactions(1, &[10, 11])).unwrap();
        assert_eq!(reactions.len(), 2);
        assert_eq!(reactions[&10], Reaction::Like);
        assert_eq!(reactions[&11], Reaction::Dislike);
    }

    #[test]
    fn test_like_and_dislike_resolve_to_like() {
        let store = MemoryStore::new()
            .with_reaction(1, 10, Reaction::Dislike)
            .with_reaction(1, 10, Reaction::Like);

        let reactions = tokio_test::block_on(store.reactions(1, &[10])).unwrap();
        assert_eq!(reactions[&10], Reaction::Like);
    }

    #[test]
    fn test_unknown_category_name() {
        let store = MemoryStore::new().with_category(EventCategory { id: 1, name: "Music".to_string() });

        let found = tokio_test::block_on(store.find_category_by_name("music")).unwrap();
        assert!(found.is_none());
    }
}
