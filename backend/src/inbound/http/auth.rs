//! Signup and login handlers.
//!
//! ```text
//! POST /auth/signup {"name":"Ada","email":"ada@example.com","password":"…"}
//! POST /auth/login {"email":"ada@example.com","password":"…"}
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::SignupOutcome;
use crate::domain::{Error, LoginCredentials, SignupDetails, UserProfile};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, UserProfileSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::text_or_empty;

/// Signup request body for `POST /auth/signup`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[serde(default, deserialize_with = "text_or_empty")]
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[serde(default)]
    #[schema(example = "07700 900123")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub password: String,
}

impl TryFrom<&SignupRequest> for SignupDetails {
    type Error = Error;

    fn try_from(value: &SignupRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(
            &value.name,
            &value.email,
            value.phone.as_deref(),
            &value.password,
        )
        .map_err(Error::from)
    }
}

/// Identifier and normalised email of the new account.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "ada@example.com")]
    pub email: String,
}

impl From<SignupOutcome> for SignupResponse {
    fn from(value: SignupOutcome) -> Self {
        Self {
            id: value.id.get(),
            email: value.email.into(),
        }
    }
}

/// Login request body for `POST /auth/login`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "text_or_empty")]
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub password: String,
}

impl TryFrom<&LoginRequest> for LoginCredentials {
    type Error = Error;

    fn try_from(value: &LoginRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.email, &value.password).map_err(Error::from)
    }
}

/// Register a client account.
#[utoipa::path(
    post,
    path = "/auth/signup",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "Account created", body = SignupResponse),
        (status = 400, description = "Missing required fields", body = ErrorSchema),
        (status = 409, description = "Email already registered", body = ErrorSchema),
        (status = 500, description = "Server error", body = ErrorSchema)
    ),
    tags = ["auth"],
    operation_id = "signup"
)]
#[post("/auth/signup")]
pub async fn signup(
    state: web::Data<HttpState>,
    payload: web::Json<SignupRequest>,
) -> ApiResult<web::Json<SignupResponse>> {
    let details = SignupDetails::try_from(&*payload)?;
    let outcome = state.signup.signup(&details).await?;
    Ok(web::Json(outcome.into()))
}

/// Authenticate and return the sanitised profile.
///
/// Unknown emails, wrong passwords and inactive accounts all produce the
/// same 401 body.
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = UserProfileSchema),
        (status = 400, description = "Missing required fields", body = ErrorSchema),
        (status = 401, description = "Invalid credentials", body = ErrorSchema),
        (status = 500, description = "Server error", body = ErrorSchema)
    ),
    tags = ["auth"],
    operation_id = "login"
)]
#[post("/auth/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<UserProfile>> {
    let credentials = LoginCredentials::try_from(&*payload)?;
    let profile = state.login.authenticate(&credentials).await?;
    Ok(web::Json(profile))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        EMAIL_TAKEN_MESSAGE, EmailAddress, INVALID_CREDENTIALS_MESSAGE, MISSING_FIELDS_MESSAGE,
        Role, UserId,
    };
    use crate::inbound::http::test_utils::MockPorts;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::{Value, json};

    async fn call(ports: MockPorts, uri: &str, body: Value) -> (StatusCode, Value) {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(ports.into_state()))
                .service(signup)
                .service(login),
        )
        .await;
        let request = actix_test::TestRequest::post()
            .uri(uri)
            .set_json(body)
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        let status = response.status();
        let body: Value = actix_test::read_body_json(response).await;
        (status, body)
    }

    #[actix_web::test]
    async fn signup_returns_id_and_normalised_email() {
        let mut ports = MockPorts::default();
        ports
            .signup
            .expect_signup()
            .withf(|details| {
                details.name() == "A"
                    && details.email().as_str() == "a@b.com"
                    && details.phone().is_none()
            })
            .times(1)
            .return_once(|details| {
                Ok(SignupOutcome {
                    id: UserId::new(1),
                    email: details.email().clone(),
                })
            });

        let (status, body) = call(
            ports,
            "/auth/signup",
            json!({ "name": "A", "email": " A@B.com ", "password": "x" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "id": 1, "email": "a@b.com" }));
    }

    #[actix_web::test]
    async fn duplicate_signup_is_conflict() {
        let mut ports = MockPorts::default();
        ports
            .signup
            .expect_signup()
            .return_once(|_| Err(Error::conflict(EMAIL_TAKEN_MESSAGE)));

        let (status, body) = call(
            ports,
            "/auth/signup",
            json!({ "name": "A", "email": "a@b.com", "password": "x" }),
        )
        .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], EMAIL_TAKEN_MESSAGE);
    }

    #[rstest]
    #[case(json!({ "email": "a@b.com", "password": "x" }), json!(["name"]))]
    #[case(json!({ "name": "A", "email": null, "password": " " }), json!(["email", "password"]))]
    #[case(json!({}), json!(["name", "email", "password"]))]
    #[actix_web::test]
    async fn signup_with_blank_fields_never_reaches_the_service(
        #[case] request: Value,
        #[case] fields: Value,
    ) {
        let mut ports = MockPorts::default();
        ports.signup.expect_signup().times(0);

        let (status, body) = call(ports, "/auth/signup", request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], MISSING_FIELDS_MESSAGE);
        assert_eq!(body["details"]["fields"], fields);
    }

    #[actix_web::test]
    async fn login_returns_the_profile_without_the_hash() {
        let mut ports = MockPorts::default();
        ports
            .login
            .expect_authenticate()
            .withf(|creds| creds.email().as_str() == "ada@example.com" && creds.password() == "pw")
            .return_once(|creds| {
                Ok(UserProfile {
                    id: UserId::new(3),
                    name: "Ada".into(),
                    email: creds.email().clone(),
                    phone: None,
                    role: Role::Client,
                })
            });

        let (status, body) = call(
            ports,
            "/auth/login",
            json!({ "email": "ADA@example.com", "password": "pw" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "id": 3, "name": "Ada", "email": "ada@example.com", "phone": null, "role": "client" })
        );
    }

    #[actix_web::test]
    async fn rejected_login_is_unauthorised() {
        let mut ports = MockPorts::default();
        ports
            .login
            .expect_authenticate()
            .return_once(|_| Err(Error::unauthorized(INVALID_CREDENTIALS_MESSAGE)));

        let (status, body) = call(
            ports,
            "/auth/login",
            json!({ "email": "ghost@example.com", "password": "pw" }),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({ "error": INVALID_CREDENTIALS_MESSAGE, "code": "unauthorized" }));
    }

    #[actix_web::test]
    async fn login_with_blank_password_is_bad_request() {
        let mut ports = MockPorts::default();
        ports.login.expect_authenticate().times(0);

        let (status, body) = call(
            ports,
            "/auth/login",
            json!({ "email": "ada@example.com", "password": "" }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"]["fields"], json!(["password"]));
    }

    #[rstest]
    fn signup_response_exposes_only_id_and_email() {
        let response = SignupResponse::from(SignupOutcome {
            id: UserId::new(9),
            email: EmailAddress::parse("x@y.z").expect("valid email"),
        });
        let json = serde_json::to_value(response).expect("serialise");
        assert_eq!(json, json!({ "id": 9, "email": "x@y.z" }));
    }
}
