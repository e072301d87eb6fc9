//! Data Service
//!
//! One facade over the two sources of truth for feedback, complaints and
//! users:
//! - `Local`: repositories over the key-value store. Everything is
//!   supported; deletes are hard deletes.
//! - `Remote`: the REST service for what it exposes. Deletes are soft
//!   (hidden-id lists kept in the key-value store) and hidden items are
//!   filtered from every list.
//!
//! Categories, todos, profiles and the session always stay local; reach
//! them through [`DataService::store`].

use chrono::{DateTime, Utc};

use crate::api::{
    ApiClient, HttpTransport, LoginRequest, NewComplaintRequest, NewFeedbackRequest,
    RegisterRequest, ReqwestTransport, StatusUpdateRequest,
};
use crate::config::{Config, DataSource};
use crate::domain::{
    non_blank, required, Author, Complaint, ComplaintDraft, Feedback, FeedbackDraft, Role, Session,
    Status, User,
};
use crate::query;
use crate::storage::{JsonStore, KeyValueStore};
use crate::{Error, Result};

/// What the active source can do, for hiding controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub feedback_status: bool,
    pub assign_complaints: bool,
    pub manage_users: bool,
    /// Deletes remove data for everyone rather than hiding it locally
    pub hard_delete: bool,
}

#[derive(Debug, Clone)]
pub struct DataService<S, T = ReqwestTransport> {
    store: JsonStore<S>,
    api: Option<ApiClient<T>>,
}

impl<S: KeyValueStore + Clone> DataService<S, ReqwestTransport> {
    /// Service for the configured source
    pub fn from_config(store: JsonStore<S>, config: &Config) -> Self {
        match config.data_source {
            DataSource::Local => Self::local(store),
            DataSource::Remote => Self::remote(store, ApiClient::with_base_url(&config.api_base_url)),
        }
    }
}

impl<S: KeyValueStore + Clone, T: HttpTransport> DataService<S, T> {
    pub fn local(store: JsonStore<S>) -> Self {
        Self { store, api: None }
    }

    pub fn remote(store: JsonStore<S>, api: ApiClient<T>) -> Self {
        Self {
            store,
            api: Some(api),
        }
    }

    pub fn source(&self) -> DataSource {
        if self.api.is_some() {
            DataSource::Remote
        } else {
            DataSource::Local
        }
    }

    pub fn store(&self) -> &JsonStore<S> {
        &self.store
    }

    pub fn capabilities(&self) -> Capabilities {
        let local = self.api.is_none();
        Capabilities {
            feedback_status: local,
            assign_complaints: local,
            manage_users: local,
            hard_delete: local,
        }
    }

    // ========================================================================
    // Session
    // ========================================================================

    /// Sign in through the session gate.
    ///
    /// Locally the name is registered as a user record; remotely only the
    /// display name is kept, so ownership falls back to name matching.
    pub fn sign_in(&self, name: &str, role: Role, now: DateTime<Utc>) -> Result<Session> {
        let session = match &self.api {
            None => self.store.users().sign_in_as(name, role, now)?,
            Some(_) => Session::new(None, required("name", name)?, role),
        };
        self.store.session().sign_in(&session)?;
        Ok(session)
    }

    pub fn sign_out(&self) -> Result<()> {
        self.store.session().sign_out()
    }

    /// Create an account on the backend and sign in as it
    pub async fn register(&self, request: &RegisterRequest) -> Result<Session> {
        let api = self.api.as_ref().ok_or_else(|| Error::unsupported("register"))?;
        let response = api.register(request).await?;
        let session = match response.user {
            Some(user) => Session::for_user(&user),
            None => Session::new(None, request.name.clone(), request.role),
        };
        self.store.session().sign_in(&session)?;
        Ok(session)
    }

    /// Log in against the backend
    pub async fn login(&self, request: &LoginRequest) -> Result<Session> {
        let api = self.api.as_ref().ok_or_else(|| Error::unsupported("login"))?;
        let response = api.login(request).await?;
        let user = response
            .user
            .ok_or_else(|| Error::Decode("login response carries no user".to_string()))?;
        let session = Session::for_user(&user);
        self.store.session().sign_in(&session)?;
        Ok(session)
    }

    // ========================================================================
    // Feedback
    // ========================================================================

    pub async fn list_feedback(&self) -> Result<Vec<Feedback>> {
        match &self.api {
            None => Ok(self.store.feedback().list()),
            Some(api) => Ok(self.store.hidden_feedback().visible(api.list_feedback().await?)),
        }
    }

    pub async fn feedback_by(&self, author: &Author) -> Result<Vec<Feedback>> {
        match (&self.api, &author.user_id) {
            (None, _) => Ok(self.store.feedback().authored_by(author)),
            (Some(api), Some(user_id)) => {
                Ok(self.store.hidden_feedback().visible(api.feedback_for_user(user_id).await?))
            }
            (Some(_), None) => Ok(query::feedback_by(&self.list_feedback().await?, author)),
        }
    }

    pub async fn submit_feedback(
        &self,
        author: &Author,
        draft: &FeedbackDraft,
        now: DateTime<Utc>,
    ) -> Result<Feedback> {
        match &self.api {
            None => self.store.feedback().submit(author, draft, now),
            Some(api) => {
                let request = NewFeedbackRequest::new(author, draft.validate()?);
                let created = api.submit_feedback(&request).await?;
                log::info!("[SERVICE] submitted feedback {}", created.id);
                Ok(created)
            }
        }
    }

    pub async fn set_feedback_status(&self, id: &str, status: Status, remark: &str) -> Result<Feedback> {
        match &self.api {
            None => self.store.feedback().set_status(id, status, remark),
            Some(_) => Err(Error::unsupported("feedback status")),
        }
    }

    pub async fn delete_feedback(&self, id: &str) -> Result<()> {
        match &self.api {
            None => self.store.feedback().delete(id).map(|_| ()),
            Some(_) => {
                log::info!("[SERVICE] hiding feedback {}", id);
                self.store.hidden_feedback().hide(id)
            }
        }
    }

    // ========================================================================
    // Complaints
    // ========================================================================

    pub async fn list_complaints(&self) -> Result<Vec<Complaint>> {
        match &self.api {
            None => Ok(self.store.complaints().list()),
            Some(api) => Ok(self.store.hidden_complaints().visible(api.list_complaints().await?)),
        }
    }

    pub async fn complaints_by(&self, author: &Author) -> Result<Vec<Complaint>> {
        match (&self.api, &author.user_id) {
            (None, _) => Ok(self.store.complaints().authored_by(author)),
            (Some(api), Some(user_id)) => Ok(self
                .store
                .hidden_complaints()
                .visible(api.complaints_for_user(user_id).await?)),
            (Some(_), None) => Ok(query::complaints_by(&self.list_complaints().await?, author)),
        }
    }

    pub async fn submit_complaint(
        &self,
        author: &Author,
        draft: &ComplaintDraft,
        now: DateTime<Utc>,
    ) -> Result<Complaint> {
        match &self.api {
            None => self.store.complaints().submit(author, draft, now),
            Some(api) => {
                let request = NewComplaintRequest::new(author, draft.validate()?);
                let created = api.submit_complaint(&request).await?;
                log::info!("[SERVICE] submitted complaint {}", created.id);
                Ok(created)
            }
        }
    }

    pub async fn set_complaint_status(
        &self,
        id: &str,
        status: Status,
        admin_remark: &str,
    ) -> Result<Complaint> {
        match &self.api {
            None => self.store.complaints().set_status(id, status, admin_remark),
            Some(api) => {
                let request = StatusUpdateRequest {
                    status,
                    admin_remark: non_blank(admin_remark),
                };
                api.update_complaint_status(id, &request).await
            }
        }
    }

    pub async fn assign_complaint(&self, id: &str, assignee: &str) -> Result<Complaint> {
        match &self.api {
            None => self.store.complaints().assign(id, assignee),
            Some(_) => Err(Error::unsupported("complaint assignment")),
        }
    }

    pub async fn delete_complaint(&self, id: &str) -> Result<()> {
        match &self.api {
            None => self.store.complaints().delete(id).map(|_| ()),
            Some(_) => {
                log::info!("[SERVICE] hiding complaint {}", id);
                self.store.hidden_complaints().hide(id)
            }
        }
    }

    // ========================================================================
    // Users
    // ========================================================================

    pub async fn list_users(&self) -> Result<Vec<User>> {
        match &self.api {
            None => Ok(self.store.users().list()),
            Some(api) => api.list_users().await,
        }
    }

    /// Whether `id` is the account of the current session
    fn is_signed_in(&self, id: &str) -> bool {
        self.store
            .session()
            .current()
            .is_some_and(|session| session.user_id.as_deref() == Some(id))
    }

    pub async fn toggle_user_blocked(&self, id: &str) -> Result<User> {
        if self.is_signed_in(id) {
            return Err(Error::validation("user", "cannot block the signed-in account"));
        }
        match &self.api {
            None => self.store.users().toggle_blocked(id),
            Some(_) => Err(Error::unsupported("block user")),
        }
    }

    /// Delete a user and their submissions
    pub async fn delete_user(&self, id: &str) -> Result<()> {
        if self.is_signed_in(id) {
            return Err(Error::validation("user", "cannot delete the signed-in account"));
        }
        match &self.api {
            None => self.store.users().delete(id).map(|_| ()),
            Some(_) => Err(Error::unsupported("delete user")),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::api::fake::FakeTransport;
    use crate::api::Method;
    use crate::storage::MemoryStore;

    type LocalService = DataService<MemoryStore, FakeTransport>;

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    fn remote() -> (DataService<MemoryStore, FakeTransport>, FakeTransport) {
        let fake = FakeTransport::default();
        let service = DataService::remote(JsonStore::new(MemoryStore::new()), ApiClient::new(fake.clone()));
        (service, fake)
    }

    fn feedback_draft() -> FeedbackDraft {
        FeedbackDraft {
            title: "Dark mode".to_string(),
            message: "Please add it".to_string(),
            category: "Feature Request".to_string(),
            rating: Some(5),
        }
    }

    #[tokio::test]
    async fn test_local_round_trip() {
        let service = LocalService::local(JsonStore::new(MemoryStore::new()));
        assert_eq!(service.source(), DataSource::Local);
        assert!(service.capabilities().hard_delete);

        let session = service.sign_in("Asha", Role::User, at(10)).unwrap();
        let author = session.author();
        let created = service.submit_feedback(&author, &feedback_draft(), at(20)).await.unwrap();

        let mine = service.feedback_by(&author).await.unwrap();
        assert_eq!(mine, vec![created.clone()]);

        let updated = service
            .set_feedback_status(&created.id, Status::Resolved, " done ")
            .await
            .unwrap();
        assert_eq!(updated.admin_remark.as_deref(), Some("done"));

        service.delete_feedback(&created.id).await.unwrap();
        assert!(service.list_feedback().await.unwrap().is_empty());
        assert_eq!(service.store().session().current(), Some(session));
    }

    #[tokio::test]
    async fn test_local_user_management() {
        let service = LocalService::local(JsonStore::new(MemoryStore::new()));
        let ravi = service.sign_in("Ravi", Role::User, at(1)).unwrap();
        let id = ravi.user_id.clone().unwrap();
        service.sign_in("Meera", Role::Admin, at(2)).unwrap();

        let blocked = service.toggle_user_blocked(&id).await.unwrap();
        assert!(blocked.blocked);

        service.delete_user(&id).await.unwrap();
        let names: Vec<String> = service.list_users().await.unwrap().into_iter().map(|u| u.name).collect();
        assert_eq!(names, vec!["Meera".to_string()]);
    }

    #[tokio::test]
    async fn test_signed_in_account_cannot_be_removed() {
        let service = LocalService::local(JsonStore::new(MemoryStore::new()));
        let admin = service.sign_in("Meera", Role::Admin, at(1)).unwrap();
        let id = admin.user_id.clone().unwrap();

        assert!(service.delete_user(&id).await.unwrap_err().is_validation());
        assert!(service.toggle_user_blocked(&id).await.unwrap_err().is_validation());
        assert_eq!(service.list_users().await.unwrap().len(), 1);

        service.sign_out().unwrap();
        service.delete_user(&id).await.unwrap();
        assert!(service.list_users().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_local_auth_is_unsupported() {
        let service = LocalService::local(JsonStore::new(MemoryStore::new()));
        let login = LoginRequest {
            email: "a@b.c".to_string(),
            password: "pw".to_string(),
        };
        assert!(matches!(
            service.login(&login).await.unwrap_err(),
            Error::Unsupported { .. }
        ));
    }

    #[tokio::test]
    async fn test_remote_soft_delete_hides_items() {
        let (service, fake) = remote();
        let list = r#"[{"_id":"f1","title":"A"},{"_id":"f2","title":"B"},{"_id":"f3","title":"C"}]"#;
        fake.respond(200, list);

        service.delete_feedback("f2").await.unwrap();
        assert!(service.store().hidden_feedback().is_hidden("f2"));

        let ids: Vec<String> = service.list_feedback().await.unwrap().into_iter().map(|f| f.id).collect();
        assert_eq!(ids, vec!["f1".to_string(), "f3".to_string()]);

        // Hiding is local; only the list request reached the backend
        assert_eq!(fake.requests.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_remote_hidden_complaints_for_user() {
        let (service, fake) = remote();
        fake.respond(200, r#"[{"_id":"c1","userId":"u1"},{"_id":"c2","userId":"u1"}]"#);
        service.delete_complaint("c1").await.unwrap();

        let author = Author::new(Some("u1".to_string()), "Asha");
        let mine = service.complaints_by(&author).await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].id, "c2");
        assert_eq!(fake.last().path, "/complaint/user/u1");
    }

    #[tokio::test]
    async fn test_remote_feedback_by_name_without_id() {
        let (service, fake) = remote();
        fake.respond(200, r#"[{"_id":"f1","user":"Asha"},{"_id":"f2","user":"Ravi"}]"#);

        let mine = service.feedback_by(&Author::new(None, "Asha")).await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(fake.last().path, "/feedback");
    }

    #[tokio::test]
    async fn test_remote_submit_validates_before_sending() {
        let (service, fake) = remote();
        let mut draft = feedback_draft();
        draft.title = "  ".to_string();

        let err = service
            .submit_feedback(&Author::new(None, "Asha"), &draft, at(1))
            .await
            .unwrap_err();
        assert!(err.is_validation());
        assert!(fake.requests.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_remote_complaint_status_uses_put() {
        let (service, fake) = remote();
        fake.respond(200, r#"{"_id":"c1","status":"In Process"}"#);

        let complaint = service
            .set_complaint_status("c1", Status::InProcess, "   ")
            .await
            .unwrap();
        assert_eq!(complaint.status, Status::InProcess);

        let request = fake.last();
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.body, Some(serde_json::json!({ "status": "In Process" })));
    }

    #[tokio::test]
    async fn test_remote_unsupported_operations() {
        let (service, _fake) = remote();
        let caps = service.capabilities();
        assert!(!caps.feedback_status && !caps.assign_complaints && !caps.manage_users);

        assert!(matches!(
            service.assign_complaint("c1", "Sam").await.unwrap_err(),
            Error::Unsupported { .. }
        ));
        assert!(matches!(
            service.set_feedback_status("f1", Status::Resolved, "").await.unwrap_err(),
            Error::Unsupported { .. }
        ));
        assert!(matches!(
            service.delete_user("u1").await.unwrap_err(),
            Error::Unsupported { .. }
        ));
    }

    #[tokio::test]
    async fn test_remote_login_stores_session() {
        let (service, fake) = remote();
        fake.respond(200, r#"{"token":"abc","user":{"_id":"u9","name":"Asha","role":"admin"}}"#);

        let login = LoginRequest {
            email: "asha@mail.com".to_string(),
            password: "pw".to_string(),
        };
        let session = service.login(&login).await.unwrap();
        assert!(session.is_admin());
        assert_eq!(session.user_id.as_deref(), Some("u9"));
        assert_eq!(service.store().session().current(), Some(session));
    }

    #[tokio::test]
    async fn test_remote_sign_in_keeps_name_only() {
        let (service, _fake) = remote();
        let session = service.sign_in("Asha", Role::User, at(1)).unwrap();
        assert_eq!(session.user_id, None);
        assert!(service.store().users().list().is_empty());
    }

    #[test]
    fn test_from_config_picks_source() {
        let store = JsonStore::new(MemoryStore::new());
        let config = Config {
            data_source: DataSource::Remote,
            ..Config::default()
        };
        let service = DataService::from_config(store.clone(), &config);
        assert_eq!(service.source(), DataSource::Remote);
        assert_eq!(DataService::from_config(store, &Config::default()).source(), DataSource::Local);
    }
}
