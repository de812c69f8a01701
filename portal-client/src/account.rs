use portal_model::{AuthSession, ProfileResponse, ProfileUpdate, Registration, User};
use serde::Serialize;

use crate::api::Result;
use crate::client::Client;

const LOGIN_ENDPOINT: &str = "/auth/login";
const REGISTER_ENDPOINT: &str = "/auth/register";
const ME_ENDPOINT: &str = "/auth/me";
const PROFILE_ENDPOINT: &str = "/auth/profile";

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

impl Client {
    /// Exchanges email and password for a session. Storing the token is up to the caller.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession> {
        let session: AuthSession = self
            .post(LOGIN_ENDPOINT, &Credentials { email, password })
            .await?;
        log::info!("logged in as {}", session.user.email);
        Ok(session)
    }

    pub async fn register(&self, registration: &Registration) -> Result<AuthSession> {
        let session: AuthSession = self.post(REGISTER_ENDPOINT, registration).await?;
        log::info!("registered {}", session.user.email);
        Ok(session)
    }

    pub async fn current_user(&self) -> Result<User> {
        self.get(ME_ENDPOINT, &[]).await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User> {
        let resp: ProfileResponse = self.put(PROFILE_ENDPOINT, update).await?;
        Ok(resp.user)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::stub;
    use axum::http::{HeaderMap, StatusCode};
    use axum::response::{IntoResponse, Response};
    use axum::routing::{get, post, put};
    use axum::{Json, Router};
    use portal_model::{EmployerProfile, JobSeekerProfile, Role, StaticToken};
    use serde_json::{json, Value};

    fn user(city: &str) -> Value {
        json!({
            "id": 5,
            "email": "dev@example.com",
            "role": "jobseeker",
            "first_name": "Dev",
            "last_name": "Eloper",
            "full_name": "Dev Eloper",
            "location": {"city": city}
        })
    }

    async fn login(Json(body): Json<Value>) -> Response {
        if body["password"] != "hunter2" {
            return (StatusCode::UNAUTHORIZED, Json(json!({"error": "Invalid credentials"})))
                .into_response();
        }
        Json(json!({"message": "Login successful", "access_token": "jwt", "user": user("Austin")}))
            .into_response()
    }

    async fn me(headers: HeaderMap) -> Response {
        match headers.get("authorization") {
            Some(value) if value == "Bearer jwt" => Json(user("Austin")).into_response(),
            _ => (
                StatusCode::UNAUTHORIZED,
                Json(json!({"msg": "Missing Authorization Header"})),
            )
                .into_response(),
        }
    }

    async fn profile(Json(body): Json<Value>) -> Json<Value> {
        let city = body["city"].as_str().unwrap_or("Austin").to_owned();
        let mut user = user(&city);
        if let Some(profile) = body.get("job_seeker_profile") {
            user["job_seeker_profile"] = profile.clone();
        }
        Json(json!({"message": "Profile updated successfully", "user": user}))
    }

    async fn register(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
        assert!(body.get("phone").is_none(), "unset fields must not be sent");
        if body["role"] == "employer" {
            assert_eq!(body["employer_profile"], json!({"company_name": "Acme"}));
            assert!(body.get("job_seeker_profile").is_none());
        }
        (
            StatusCode::CREATED,
            Json(json!({"message": "Registration successful", "access_token": "jwt", "user": user("Austin")})),
        )
    }

    fn router() -> Router {
        Router::new()
            .route("/api/auth/login", post(login))
            .route("/api/auth/register", post(register))
            .route("/api/auth/me", get(me))
            .route("/api/auth/profile", put(profile))
    }

    #[tokio::test]
    async fn test_login() {
        let base_url = stub::serve(router()).await;
        let client = stub::client(&base_url, StaticToken::anonymous());
        let session = client.login("dev@example.com", "hunter2").await.expect("Login failed");
        assert_eq!(session.access_token, "jwt");
        assert_eq!(session.user.role, Role::JobSeeker);

        let err = client.login("dev@example.com", "wrong").await.unwrap_err();
        assert!(err.is_unauthorized());
        assert!(err.to_string().contains("Invalid credentials"));
    }

    #[tokio::test]
    async fn test_current_user_needs_token() {
        let base_url = stub::serve(router()).await;
        let anonymous = stub::client(&base_url, StaticToken::anonymous());
        let err = anonymous.current_user().await.unwrap_err();
        assert!(err.to_string().contains("Missing Authorization Header"));

        let authed = stub::client(&base_url, StaticToken::new("jwt"));
        let user = authed.current_user().await.expect("Request failed");
        assert_eq!(user.display_name(), "Dev Eloper");
    }

    #[tokio::test]
    async fn test_update_profile_and_register() {
        let base_url = stub::serve(router()).await;
        let client = stub::client(&base_url, StaticToken::new("jwt"));
        let update = ProfileUpdate {
            city: Some("Denver".to_owned()),
            ..Default::default()
        };
        let user = client.update_profile(&update).await.expect("Update failed");
        assert_eq!(user.location.city.as_deref(), Some("Denver"));

        let registration = Registration {
            email: "new@example.com".to_owned(),
            password: "pw".to_owned(),
            first_name: "New".to_owned(),
            last_name: "User".to_owned(),
            ..Default::default()
        };
        let session = client.register(&registration).await.expect("Register failed");
        assert_eq!(session.access_token, "jwt");
    }

    #[tokio::test]
    async fn test_role_profiles_reach_the_server() {
        let base_url = stub::serve(router()).await;
        let client = stub::client(&base_url, StaticToken::new("jwt"));
        let update = ProfileUpdate {
            job_seeker_profile: Some(JobSeekerProfile {
                current_job_title: Some("Analyst".to_owned()),
                experience: Some(6),
                ..Default::default()
            }),
            ..Default::default()
        };
        let user = client.update_profile(&update).await.expect("Update failed");
        let profile = user.job_seeker_profile.expect("profile not echoed");
        assert_eq!(profile.experience, Some(6));
        assert_eq!(profile.current_job_title.as_deref(), Some("Analyst"));

        let registration = Registration {
            email: "hr@acme.io".to_owned(),
            password: "pw".to_owned(),
            role: Some(Role::Employer),
            employer_profile: Some(EmployerProfile {
                company_name: Some("Acme".to_owned()),
                ..Default::default()
            }),
            ..Default::default()
        };
        client.register(&registration).await.expect("Register failed");
    }
}
