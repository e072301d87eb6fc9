//! REST Client
//!
//! One method per backend endpoint. Each sends a single request and
//! returns typed data; non-2xx answers become [`Error::Http`] and bodies
//! that do not match the expected shape become [`Error::Decode`]. List
//! endpoints only need an array: records inside it that do not decode are
//! skipped and logged.

mod transport;
mod types;

pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, ReqwestTransport};
pub use types::{
    AuthResponse, LoginRequest, NewComplaintRequest, NewFeedbackRequest, RegisterRequest,
    StatusUpdateRequest,
};

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::domain::{Complaint, Feedback, User};
use crate::storage::decode_entries;
use crate::{Error, Result};

/// Everything but unreserved characters is escaped inside a path segment
const SEGMENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Longest body excerpt quoted in an error message
const ERROR_EXCERPT_CHARS: usize = 200;

fn segment(raw: &str) -> String {
    utf8_percent_encode(raw, SEGMENT_ENCODE_SET).to_string()
}

/// Some endpoints wrap their payload (`{"feedback": {...}}`,
/// `{"data": [...]}`); others answer bare.
fn unwrap_envelope(value: Value, wrapper_keys: &[&str]) -> Value {
    match value {
        Value::Object(mut map) => {
            for key in wrapper_keys.iter().chain(["data"].iter()) {
                if let Some(inner) = map.remove(*key) {
                    return inner;
                }
            }
            Value::Object(map)
        }
        other => other,
    }
}

fn error_message(body: &str) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        for key in ["message", "error"] {
            if let Some(Value::String(message)) = map.get(key) {
                return message.clone();
            }
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "request failed".to_string()
    } else {
        trimmed.chars().take(ERROR_EXCERPT_CHARS).collect()
    }
}

/// Typed client over an [`HttpTransport`]
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    transport: T,
}

impl ApiClient<ReqwestTransport> {
    pub fn with_base_url(base_url: &str) -> Self {
        Self::new(ReqwestTransport::new(base_url))
    }
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn send(&self, method: Method, path: String, body: Option<Value>) -> Result<Value> {
        let request = ApiRequest { method, path, body };
        let label = format!("{} {}", request.method.as_str(), request.path);
        let response = self.transport.send(request).await?;

        if !response.is_success() {
            let message = error_message(&response.body);
            log::warn!("[API] {} failed with {}: {}", label, response.status, message);
            return Err(Error::Http {
                status: response.status,
                message,
            });
        }
        if response.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&response.body)
            .map_err(|e| Error::Decode(format!("{label}: {e}")))
    }

    async fn request<R: DeserializeOwned>(
        &self,
        method: Method,
        path: String,
        body: Option<Value>,
        wrapper_keys: &[&str],
    ) -> Result<R> {
        let label = format!("{} {}", method.as_str(), path);
        let value = unwrap_envelope(self.send(method, path, body).await?, wrapper_keys);
        serde_json::from_value(value).map_err(|e| Error::Decode(format!("{label}: {e}")))
    }

    async fn list<R: DeserializeOwned>(&self, path: String, wrapper_keys: &[&str]) -> Result<Vec<R>> {
        let label = format!("GET {path}");
        let values: Vec<Value> = self.request(Method::Get, path, None, wrapper_keys).await?;
        Ok(decode_entries(&label, values))
    }

    fn body<B: Serialize>(body: &B) -> Result<Option<Value>> {
        Ok(Some(serde_json::to_value(body)?))
    }

    // ========================================================================
    // Auth
    // ========================================================================

    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse> {
        let value = self.send(Method::Post, "/register".to_string(), Self::body(request)?).await?;
        serde_json::from_value(value).map_err(|e| Error::Decode(format!("POST /register: {e}")))
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse> {
        let value = self.send(Method::Post, "/login".to_string(), Self::body(request)?).await?;
        serde_json::from_value(value).map_err(|e| Error::Decode(format!("POST /login: {e}")))
    }

    // ========================================================================
    // Feedback
    // ========================================================================

    pub async fn submit_feedback(&self, request: &NewFeedbackRequest) -> Result<Feedback> {
        self.request(Method::Post, "/feedback".to_string(), Self::body(request)?, &["feedback"])
            .await
    }

    pub async fn list_feedback(&self) -> Result<Vec<Feedback>> {
        self.list("/feedback".to_string(), &["feedbacks", "feedback"]).await
    }

    pub async fn feedback_for_user(&self, user_id: &str) -> Result<Vec<Feedback>> {
        let path = format!("/feedback/user/{}", segment(user_id));
        self.list(path, &["feedbacks", "feedback"]).await
    }

    // ========================================================================
    // Complaints
    // ========================================================================

    pub async fn submit_complaint(&self, request: &NewComplaintRequest) -> Result<Complaint> {
        self.request(Method::Post, "/complaint".to_string(), Self::body(request)?, &["complaint"])
            .await
    }

    pub async fn list_complaints(&self) -> Result<Vec<Complaint>> {
        self.list("/complaint".to_string(), &["complaints", "complaint"]).await
    }

    pub async fn complaints_for_user(&self, user_id: &str) -> Result<Vec<Complaint>> {
        let path = format!("/complaint/user/{}", segment(user_id));
        self.list(path, &["complaints", "complaint"]).await
    }

    pub async fn update_complaint_status(
        &self,
        id: &str,
        request: &StatusUpdateRequest,
    ) -> Result<Complaint> {
        let path = format!("/complaint/{}/status", segment(id));
        self.request(Method::Put, path, Self::body(request)?, &["complaint"]).await
    }

    // ========================================================================
    // Users
    // ========================================================================

    pub async fn list_users(&self) -> Result<Vec<User>> {
        self.list("/users".to_string(), &["users"]).await
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    use async_trait::async_trait;

    use super::{ApiRequest, ApiResponse, HttpTransport};
    use crate::{Error, Result};

    /// Records requests and replays queued responses in order
    #[derive(Clone, Default)]
    pub struct FakeTransport {
        pub requests: Rc<RefCell<Vec<ApiRequest>>>,
        responses: Rc<RefCell<VecDeque<ApiResponse>>>,
    }

    impl FakeTransport {
        pub fn respond(&self, status: u16, body: &str) -> &Self {
            self.responses.borrow_mut().push_back(ApiResponse {
                status,
                body: body.to_string(),
            });
            self
        }

        pub fn last(&self) -> ApiRequest {
            self.requests.borrow().last().cloned().unwrap()
        }
    }

    #[async_trait(?Send)]
    impl HttpTransport for FakeTransport {
        async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
            self.requests.borrow_mut().push(request);
            self.responses
                .borrow_mut()
                .pop_front()
                .ok_or_else(|| Error::Network("connection refused".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::fake::FakeTransport;
    use super::*;
    use crate::domain::{Author, FeedbackDraft, Role, Status};

    fn client() -> (ApiClient<FakeTransport>, FakeTransport) {
        let transport = FakeTransport::default();
        (ApiClient::new(transport.clone()), transport)
    }

    #[tokio::test]
    async fn test_list_feedback_bare_array() {
        let (api, fake) = client();
        fake.respond(200, r#"[{"_id":"a1","title":"Slow","status":"pending"}]"#);

        let items = api.list_feedback().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "a1");
        assert_eq!(items[0].status, Status::Pending);

        let request = fake.last();
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.path, "/feedback");
        assert_eq!(request.body, None);
    }

    #[tokio::test]
    async fn test_wrapped_list_is_unwrapped() {
        let (api, fake) = client();
        fake.respond(200, r#"{"users":[{"_id":"u1","name":"Asha"}]}"#);

        let users = api.list_users().await.unwrap();
        assert_eq!(users[0].name, "Asha");
        assert_eq!(fake.last().path, "/users");
    }

    #[tokio::test]
    async fn test_submit_feedback_posts_camel_case_body() {
        let (api, fake) = client();
        fake.respond(201, r#"{"message":"ok","feedback":{"_id":"f9","title":"Slow"}}"#);

        let draft = FeedbackDraft {
            title: "Slow".to_string(),
            message: "Very slow".to_string(),
            category: "Performance".to_string(),
            rating: Some(3),
        };
        let author = Author::new(Some("u1".to_string()), "Asha");
        let created = api
            .submit_feedback(&NewFeedbackRequest::new(&author, draft))
            .await
            .unwrap();
        assert_eq!(created.id, "f9");

        let request = fake.last();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, "/feedback");
        assert_eq!(
            request.body,
            Some(json!({
                "userId": "u1",
                "user": "Asha",
                "title": "Slow",
                "message": "Very slow",
                "category": "Performance",
                "rating": 3,
            }))
        );
    }

    #[tokio::test]
    async fn test_user_paths_are_encoded() {
        let (api, fake) = client();
        fake.respond(200, "[]").respond(200, "[]");

        api.feedback_for_user("a/b c").await.unwrap();
        assert_eq!(fake.last().path, "/feedback/user/a%2Fb%20c");

        api.complaints_for_user("u-1_x.y~z").await.unwrap();
        assert_eq!(fake.last().path, "/complaint/user/u-1_x.y~z");
    }

    #[tokio::test]
    async fn test_update_complaint_status() {
        let (api, fake) = client();
        fake.respond(200, r#"{"_id":"c1","subject":"Noise","status":"Resolved"}"#);

        let update = StatusUpdateRequest {
            status: Status::Resolved,
            admin_remark: Some("fixed".to_string()),
        };
        let complaint = api.update_complaint_status("c1", &update).await.unwrap();
        assert_eq!(complaint.status, Status::Resolved);

        let request = fake.last();
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.path, "/complaint/c1/status");
        assert_eq!(
            request.body,
            Some(json!({ "status": "Resolved", "adminRemark": "fixed" }))
        );
    }

    #[tokio::test]
    async fn test_complaint_endpoints() {
        let (api, fake) = client();
        fake.respond(200, "[]").respond(201, r#"{"_id":"c2"}"#);

        api.list_complaints().await.unwrap();
        assert_eq!(fake.last().path, "/complaint");

        let request = NewComplaintRequest::new(
            &Author::new(None, "Ravi"),
            crate::domain::ComplaintDraft {
                subject: "Noise".to_string(),
                message: "Too loud".to_string(),
                ..Default::default()
            },
        );
        api.submit_complaint(&request).await.unwrap();
        let sent = fake.last();
        assert_eq!((sent.method, sent.path.as_str()), (Method::Post, "/complaint"));
        assert_eq!(sent.body.unwrap()["priority"], "Low");
    }

    #[tokio::test]
    async fn test_auth_endpoints() {
        let (api, fake) = client();
        fake.respond(201, r#"{"message":"registered","user":{"_id":"u7","name":"Asha","role":"user"}}"#)
            .respond(200, r#"{"token":"t0k","user":{"_id":"u7","name":"Asha"}}"#);

        let register = RegisterRequest {
            name: "Asha".to_string(),
            email: "asha@mail.com".to_string(),
            password: "secret".to_string(),
            phone: None,
            role: Role::User,
        };
        let registered = api.register(&register).await.unwrap();
        assert_eq!(registered.user.unwrap().id, "u7");
        assert_eq!(fake.last().path, "/register");
        assert_eq!(fake.last().body.unwrap()["role"], "user");

        let login = LoginRequest {
            email: "asha@mail.com".to_string(),
            password: "secret".to_string(),
        };
        let session = api.login(&login).await.unwrap();
        assert_eq!(session.token.as_deref(), Some("t0k"));
        assert_eq!(fake.last().path, "/login");
    }

    #[tokio::test]
    async fn test_non_success_maps_to_http_error() {
        let (api, fake) = client();
        fake.respond(401, r#"{"message":"Invalid credentials"}"#)
            .respond(500, "<html>boom</html>");

        let login = LoginRequest {
            email: "x@y.z".to_string(),
            password: "bad".to_string(),
        };
        match api.login(&login).await.unwrap_err() {
            Error::Http { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid credentials");
            }
            other => panic!("unexpected error: {other}"),
        }

        match api.list_users().await.unwrap_err() {
            Error::Http { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "<html>boom</html>");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_schema_mismatch_is_decode_error() {
        let (api, fake) = client();
        fake.respond(200, r#"{"unexpected": true}"#);

        let err = api.list_feedback().await.unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[tokio::test]
    async fn test_odd_record_does_not_fail_the_list() {
        let (api, fake) = client();
        fake.respond(
            200,
            r#"{"feedbacks":[
                {"_id":"a1","title":"Slow","rating":"4","status":"Closed"},
                {"title":"no id at all"},
                {"_id":"a3","title":"Fine","rating":4.5,"createdAt":"soon"}
            ]}"#,
        );

        let items = api.list_feedback().await.unwrap();
        let ids: Vec<&str> = items.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["a1", "a3"]);
        assert_eq!(items[0].rating, Some(4));
        assert_eq!(items[0].status, Status::Resolved);
        assert_eq!(items[1].rating, Some(5));
        assert_eq!(items[1].created_at, None);
    }

    #[tokio::test]
    async fn test_odd_user_record_is_skipped() {
        let (api, fake) = client();
        fake.respond(200, r#"[{"_id":"u1","name":"Asha","phone":5550100},{"_id":"u2"}]"#);

        let users = api.list_users().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].phone.as_deref(), Some("5550100"));
    }

    #[tokio::test]
    async fn test_transport_failure_is_network_error() {
        let (api, _fake) = client();
        let err = api.list_complaints().await.unwrap_err();
        assert!(matches!(err, Error::Network(_)));
    }
}
