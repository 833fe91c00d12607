//! # Console actions
//!
//! Submit and commit contracts for the user forms and the delete control. Each
//! flow is split in two so the UI never holds a store borrow across an await:
//!
//! 1. an async **submit** that validates a draft snapshot and talks to the
//!    [`UserService`], and
//! 2. a sync **commit** that applies the outcome to the [`UserStore`] and the draft,
//!    and returns the [`Notice`] to show.
//!
//! | Flow | Submit | Commit on success | Commit on failure |
//! |------|--------|-------------------|-------------------|
//! | Create | [`create_user`] | append record, reset draft, success notice | draft kept, error notice |
//! | Edit | [`update_user`] | update record in place, success notice | store kept, error notice |
//! | Search | [`search_users`] | replace store if the ticket is still the latest, no notice | store kept, error notice |
//! | Delete | [`delete_user`] | remove record, success notice | store kept, error notice |
//!
//! Failures are always surfaced, search included, and always logged. Nothing
//! is retried.

use store::{
    CreateDraft, DeleteFlow, EditDraft, RequestSequencer, SearchFilter, SearchTicket, UserPatch,
    UserRecord, UserStore,
};

use crate::client::UserService;
use crate::error::{ApiError, ApiResult};
use crate::notice::Notice;

/// Validate the create form and post it.
///
/// Returns the record to append. A blank username fails with
/// [`ApiError::Validation`] before anything is sent.
pub async fn create_user<S: UserService>(service: &S, draft: &CreateDraft) -> ApiResult<UserRecord> {
    let body = draft.validate()?;
    service.create(&body).await?;
    Ok(body.to_record())
}

/// Apply the outcome of [`create_user`].
pub fn commit_create(
    store: &mut UserStore,
    draft: &mut CreateDraft,
    result: ApiResult<UserRecord>,
) -> Notice {
    match result {
        Ok(record) => {
            tracing::info!("Created user {}", record.username);
            let notice = Notice::success(format!("User {} created", record.username));
            store.append(record);
            draft.reset();
            notice
        }
        Err(e @ ApiError::Conflict { .. }) => {
            tracing::warn!("Create rejected: {}", e);
            Notice::error(e.to_string())
        }
        Err(e) => {
            tracing::error!("Failed to create user: {}", e);
            Notice::error(format!("Could not create user: {e}"))
        }
    }
}

/// Send the edit dialog's changes for the record it was opened on.
pub async fn update_user<S: UserService>(service: &S, draft: &EditDraft) -> ApiResult<UserPatch> {
    let patch = draft.to_patch();
    service.update(draft.username(), &patch).await?;
    Ok(patch)
}

/// Apply the outcome of [`update_user`].
pub fn commit_update(store: &mut UserStore, username: &str, result: ApiResult<UserPatch>) -> Notice {
    match result {
        Ok(patch) => {
            if !store.update_by_username(username, &patch) {
                tracing::warn!("Updated user {} is no longer in the list", username);
            }
            tracing::info!("Updated user {}", username);
            Notice::success(format!("User {username} updated"))
        }
        Err(e) => {
            tracing::error!("Failed to update user {}: {}", username, e);
            Notice::error(format!("Could not update {username}: {e}"))
        }
    }
}

/// Run a search. Callers take a [`SearchTicket`] before calling this and hand it
/// to [`commit_search`] afterwards.
pub async fn search_users<S: UserService>(
    service: &S,
    filter: &SearchFilter,
) -> ApiResult<Vec<UserRecord>> {
    service.search(filter).await
}

/// Apply the outcome of [`search_users`] issued under `ticket`.
///
/// Results of a request that is no longer the latest are dropped without
/// touching the store. Results of a request issued before a local create, edit
/// or delete are dropped as well, with an info notice, so the older snapshot
/// does not undo that change. Successful searches raise no notice.
pub fn commit_search(
    store: &mut UserStore,
    sequencer: &RequestSequencer,
    ticket: SearchTicket,
    result: ApiResult<Vec<UserRecord>>,
) -> Option<Notice> {
    if !sequencer.is_latest(ticket) {
        tracing::debug!("Dropping stale search response {:?}", ticket);
        return None;
    }
    match result {
        Ok(_) if store.revision() != ticket.revision() => {
            tracing::debug!("Dropping search response {:?}, store changed meanwhile", ticket);
            Some(Notice::info(
                "The list changed while searching. Search again to refresh it.",
            ))
        }
        Ok(users) => {
            tracing::info!("Search matched {} users", users.len());
            store.replace_all(users);
            None
        }
        Err(e) => {
            tracing::error!("Search failed: {}", e);
            Some(Notice::error(format!("Search failed: {e}")))
        }
    }
}

/// Delete `username` if and only if the row's flow has been confirmed.
///
/// Returns `None` without touching the network for any other state.
pub async fn delete_user<S: UserService>(
    service: &S,
    flow: DeleteFlow,
    username: &str,
) -> Option<ApiResult<()>> {
    if !flow.is_deleting() {
        tracing::debug!("Delete of {} not confirmed ({:?})", username, flow);
        return None;
    }
    Some(service.delete(username).await)
}

/// Apply the outcome of [`delete_user`] and settle the row's flow.
pub fn commit_delete(
    store: &mut UserStore,
    flow: &mut DeleteFlow,
    username: &str,
    result: ApiResult<()>,
) -> Notice {
    match result {
        Ok(()) => {
            flow.finish(true);
            store.remove_by_username(username);
            tracing::info!("Deleted user {}", username);
            Notice::success(format!("User {username} deleted"))
        }
        Err(e) => {
            flow.finish(false);
            tracing::error!("Failed to delete user {}: {}", username, e);
            Notice::error(format!("Could not delete {username}: {e}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use store::{query, NewUser, ProjectTag, SearchDraft};

    use super::*;
    use crate::notice::NoticeLevel;

    /// Records every call and answers with a canned result.
    #[derive(Default)]
    struct FakeService {
        calls: RefCell<Vec<String>>,
        fail_with: Option<ApiError>,
        results: Vec<UserRecord>,
    }

    impl FakeService {
        fn failing(err: ApiError) -> Self {
            Self {
                fail_with: Some(err),
                ..Default::default()
            }
        }

        fn returning(results: Vec<UserRecord>) -> Self {
            Self {
                results,
                ..Default::default()
            }
        }

        fn answer(&self, call: String) -> ApiResult<()> {
            self.calls.borrow_mut().push(call);
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl UserService for FakeService {
        async fn search(&self, filter: &SearchFilter) -> ApiResult<Vec<UserRecord>> {
            self.answer(format!("search?{}", query::compose(filter)))?;
            Ok(self.results.clone())
        }

        async fn create(&self, user: &NewUser) -> ApiResult<()> {
            self.answer(format!("create {}", user.username))
        }

        async fn update(&self, username: &str, _patch: &UserPatch) -> ApiResult<()> {
            self.answer(format!("update {username}"))
        }

        async fn delete(&self, username: &str) -> ApiResult<()> {
            self.answer(format!("delete {username}"))
        }
    }

    fn record(username: &str) -> UserRecord {
        UserRecord {
            id: None,
            username: username.to_string(),
            display_name: username.to_string(),
            role: "member".to_string(),
            projects: vec![],
            active: true,
        }
    }

    #[tokio::test]
    async fn test_create_success_appends_and_resets_draft() {
        let service = FakeService::default();
        let mut store = UserStore::new();
        let mut draft = CreateDraft {
            username: "alice".to_string(),
            ..Default::default()
        };
        draft.projects.add("x");
        draft.projects.add("y");

        let result = create_user(&service, &draft).await;
        let notice = commit_create(&mut store, &mut draft, result);

        assert_eq!(notice.level, NoticeLevel::Success);
        assert_eq!(draft, CreateDraft::default());
        assert_eq!(service.calls(), vec!["create alice"]);

        let alice = store.find("alice").unwrap();
        assert_eq!(
            alice.projects,
            vec![ProjectTag::new(0, "x"), ProjectTag::new(1, "y")]
        );
    }

    #[tokio::test]
    async fn test_create_blank_username_never_calls_service() {
        let service = FakeService::default();
        let draft = CreateDraft::default();

        let err = create_user(&service, &draft).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation { .. }));
        assert!(service.calls().is_empty());
    }

    #[tokio::test]
    async fn test_create_conflict_keeps_draft_and_reports() {
        let service = FakeService::failing(ApiError::Conflict {
            username: "alice".to_string(),
        });
        let mut store = UserStore::new();
        let mut draft = CreateDraft {
            username: "alice".to_string(),
            role: "admin".to_string(),
            ..Default::default()
        };
        let before = draft.clone();

        let result = create_user(&service, &draft).await;
        let notice = commit_create(&mut store, &mut draft, result);

        assert!(notice.is_error());
        assert!(notice.message.contains("already exists"));
        assert_eq!(draft, before);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_update_success_patches_store() {
        let service = FakeService::default();
        let mut store = UserStore::with_records(vec![record("bob")]);

        let mut draft = EditDraft::from_record(store.find("bob").unwrap());
        draft.role = "lead".to_string();
        draft.projects.add("core");

        let result = update_user(&service, &draft).await;
        let notice = commit_update(&mut store, "bob", result);

        assert_eq!(notice.level, NoticeLevel::Success);
        assert_eq!(service.calls(), vec!["update bob"]);
        let bob = store.find("bob").unwrap();
        assert_eq!(bob.role, "lead");
        assert_eq!(bob.projects, vec![ProjectTag::new(0, "core")]);
    }

    #[tokio::test]
    async fn test_update_failure_leaves_store_and_notifies() {
        let service = FakeService::failing(ApiError::Status {
            status: 500,
            body: String::new(),
        });
        let mut store = UserStore::with_records(vec![record("bob")]);
        let before = store.clone();

        let mut draft = EditDraft::from_record(store.find("bob").unwrap());
        draft.role = "lead".to_string();

        let result = update_user(&service, &draft).await;
        let notice = commit_update(&mut store, "bob", result);

        assert!(notice.is_error());
        assert_eq!(store, before);
    }

    #[tokio::test]
    async fn test_search_empty_result_clears_store() {
        let service = FakeService::returning(vec![]);
        let mut store = UserStore::with_records(vec![record("alice"), record("bob")]);
        let mut sequencer = RequestSequencer::new();

        let ticket = sequencer.issue(store.revision());
        let result = search_users(&service, &SearchDraft::default().to_filter()).await;
        let notice = commit_search(&mut store, &sequencer, ticket, result);

        assert!(notice.is_none());
        assert!(store.get_all().is_empty());
        assert_eq!(service.calls(), vec!["search?"]);
    }

    #[tokio::test]
    async fn test_search_failure_keeps_store_and_notifies() {
        let service = FakeService::failing(ApiError::Transport("offline".to_string()));
        let mut store = UserStore::with_records(vec![record("alice")]);
        let mut sequencer = RequestSequencer::new();

        let ticket = sequencer.issue(store.revision());
        let result = search_users(&service, &SearchFilter::default()).await;
        let notice = commit_search(&mut store, &sequencer, ticket, result).unwrap();

        assert!(notice.is_error());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_stale_search_response_is_dropped() {
        let mut store = UserStore::new();
        let mut sequencer = RequestSequencer::new();

        let first = sequencer.issue(store.revision());
        let second = sequencer.issue(store.revision());

        // The newer request resolves first
        commit_search(&mut store, &sequencer, second, Ok(vec![record("new")]));
        commit_search(&mut store, &sequencer, first, Ok(vec![record("old")]));

        assert_eq!(store.len(), 1);
        assert!(store.find("new").is_some());

        // Stale failures are not surfaced either
        assert!(commit_search(
            &mut store,
            &sequencer,
            first,
            Err(ApiError::Transport("late".to_string()))
        )
        .is_none());
    }

    #[test]
    fn test_search_issued_before_local_delete_does_not_restore_row() {
        let mut store = UserStore::with_records(vec![record("alice"), record("bob")]);
        let mut sequencer = RequestSequencer::new();

        let ticket = sequencer.issue(store.revision());
        let mut flow = DeleteFlow::default();
        flow.request();
        flow.confirm();
        commit_delete(&mut store, &mut flow, "bob", Ok(()));

        // The search snapshot still lists bob
        let notice = commit_search(
            &mut store,
            &sequencer,
            ticket,
            Ok(vec![record("alice"), record("bob")]),
        )
        .unwrap();

        assert_eq!(notice.level, NoticeLevel::Info);
        assert_eq!(store.len(), 1);
        assert!(store.find("bob").is_none());
    }

    #[tokio::test]
    async fn test_delete_requires_confirmation() {
        let service = FakeService::default();
        let mut store = UserStore::with_records(vec![record("alice")]);

        let mut flow = DeleteFlow::default();
        flow.request();
        assert!(delete_user(&service, flow, "alice").await.is_none());

        assert!(service.calls().is_empty());
        assert_eq!(store.len(), 1);

        flow.confirm();
        let result = delete_user(&service, flow, "alice").await.unwrap();
        let notice = commit_delete(&mut store, &mut flow, "alice", result);

        assert_eq!(notice.level, NoticeLevel::Success);
        assert_eq!(flow, DeleteFlow::Removed);
        assert!(store.is_empty());
        assert_eq!(service.calls(), vec!["delete alice"]);
    }

    #[tokio::test]
    async fn test_delete_failure_leaves_row() {
        let service = FakeService::failing(ApiError::Status {
            status: 404,
            body: String::new(),
        });
        let mut store = UserStore::with_records(vec![record("alice")]);

        let mut flow = DeleteFlow::default();
        flow.request();
        flow.confirm();
        let result = delete_user(&service, flow, "alice").await.unwrap();
        let notice = commit_delete(&mut store, &mut flow, "alice", result);

        assert!(notice.is_error());
        assert_eq!(flow, DeleteFlow::Failed);
        assert_eq!(store.len(), 1);
    }
}
