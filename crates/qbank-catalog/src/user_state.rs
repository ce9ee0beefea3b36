//! Per-user bookmark/done sets and the report sink.
//!
//! State lives in process memory only and is lost on restart. Every
//! operation holds the store's mutex for its whole duration, so compound
//! read-then-write steps are atomic with respect to other requests.

use std::collections::{BTreeSet, HashMap};

use qbank_core::{ReportRecord, UserList};
use tokio::sync::Mutex;
use tracing::{debug, info};

#[derive(Debug, Default)]
struct UserState {
    bookmarks: HashMap<String, BTreeSet<String>>,
    done: HashMap<String, BTreeSet<String>>,
    reports: Vec<ReportRecord>,
}

impl UserState {
    fn sets(&mut self, list: UserList) -> &mut HashMap<String, BTreeSet<String>> {
        match list {
            UserList::Bookmarks => &mut self.bookmarks,
            UserList::Done => &mut self.done,
        }
    }
}

/// In-memory store of user bookmark/done sets and question reports.
#[derive(Debug, Default)]
pub struct UserStateStore {
    inner: Mutex<UserState>,
}

impl UserStateStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Question identifiers in the user's list, ascending. Empty for unseen users.
    pub async fn list(&self, list: UserList, user_id: &str) -> Vec<String> {
        let mut state = self.inner.lock().await;
        state
            .sets(list)
            .get(user_id)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Add a question to the user's list. Returns whether it was newly added.
    pub async fn add(&self, list: UserList, user_id: &str, question_id: &str) -> bool {
        let mut state = self.inner.lock().await;
        let inserted = state
            .sets(list)
            .entry(user_id.to_string())
            .or_default()
            .insert(question_id.to_string());
        debug!(%list, user_id, question_id, inserted, "user list add");
        inserted
    }

    /// Remove a question from the user's list. Returns whether it was present.
    pub async fn remove(&self, list: UserList, user_id: &str, question_id: &str) -> bool {
        let mut state = self.inner.lock().await;
        let sets = state.sets(list);
        let removed = sets
            .get_mut(user_id)
            .is_some_and(|set| set.remove(question_id));
        if sets.get(user_id).is_some_and(BTreeSet::is_empty) {
            sets.remove(user_id);
        }
        debug!(%list, user_id, question_id, removed, "user list remove");
        removed
    }

    /// Append a report. The question is not checked against any table.
    pub async fn report(
        &self,
        question_id: &str,
        user_id: Option<&str>,
        reason: &str,
    ) -> ReportRecord {
        let record = ReportRecord::new(question_id, user_id, reason);
        self.inner.lock().await.reports.push(record.clone());
        info!(question_id, user_id = user_id.unwrap_or("-"), "question reported");
        record
    }

    /// Snapshot of every report so far, oldest first.
    pub async fn reports(&self) -> Vec<ReportRecord> {
        self.inner.lock().await.reports.clone()
    }

    /// Drop all user lists and reports.
    pub async fn reset(&self) {
        *self.inner.lock().await = UserState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(UserList::Bookmarks)]
    #[case(UserList::Done)]
    #[tokio::test]
    async fn add_list_remove_round_trip(#[case] list: UserList) {
        let store = UserStateStore::new();
        assert!(store.list(list, "u1").await.is_empty());

        assert!(store.add(list, "u1", "Q2").await);
        assert!(store.add(list, "u1", "Q1").await);
        assert_eq!(store.list(list, "u1").await, vec!["Q1", "Q2"]);

        assert!(store.remove(list, "u1", "Q2").await);
        assert_eq!(store.list(list, "u1").await, vec!["Q1"]);
    }

    #[rstest]
    #[case(UserList::Bookmarks)]
    #[case(UserList::Done)]
    #[tokio::test]
    async fn add_and_remove_are_idempotent(#[case] list: UserList) {
        let store = UserStateStore::new();
        assert!(store.add(list, "u1", "Q1").await);
        assert!(!store.add(list, "u1", "Q1").await);
        assert_eq!(store.list(list, "u1").await, vec!["Q1"]);

        assert!(store.remove(list, "u1", "Q1").await);
        assert!(!store.remove(list, "u1", "Q1").await);
        assert!(!store.remove(list, "nobody", "Q1").await);
        assert!(store.list(list, "u1").await.is_empty());
    }

    #[tokio::test]
    async fn lists_are_independent_per_user_and_kind() {
        let store = UserStateStore::new();
        store.add(UserList::Bookmarks, "u1", "Q1").await;
        store.add(UserList::Done, "u1", "Q2").await;
        store.add(UserList::Bookmarks, "u2", "Q3").await;

        assert_eq!(store.list(UserList::Bookmarks, "u1").await, vec!["Q1"]);
        assert_eq!(store.list(UserList::Done, "u1").await, vec!["Q2"]);
        assert_eq!(store.list(UserList::Bookmarks, "u2").await, vec!["Q3"]);
        assert!(store.list(UserList::Done, "u2").await.is_empty());
    }

    #[tokio::test]
    async fn reports_append_and_reset_clears_everything() {
        let store = UserStateStore::new();
        store.report("Q1", Some("u1"), "blurry image").await;
        store.report("Q404", None, "wrong answer").await;

        let reports = store.reports().await;
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].question_id, "Q1");
        assert_eq!(reports[0].user_id.as_deref(), Some("u1"));
        assert_eq!(reports[1].question_id, "Q404");
        assert_eq!(reports[1].user_id, None);

        store.add(UserList::Bookmarks, "u1", "Q1").await;
        store.reset().await;
        assert!(store.reports().await.is_empty());
        assert!(store.list(UserList::Bookmarks, "u1").await.is_empty());
    }
}
