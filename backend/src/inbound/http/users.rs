//! Users API handlers.
//!
//! ```text
//! GET /users
//! POST /users {"name":"Ann","email":"a@x.com"}
//! PUT /users/65f1c0ffee0000000000abcd {"name":"Ann2"}
//! DELETE /users/65f1c0ffee0000000000abcd
//! ```
//!
//! Update and delete answer `200` with JSON `null` when no user has the id.

use actix_web::{delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{Error, User, UserChanges, UserDraft, UserId, UserValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Stored user as returned by every user route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    /// Store-assigned identifier.
    #[serde(rename = "_id")]
    #[schema(example = "65f1c0ffee0000000000abcd")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Ann")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "a@x.com")]
    pub email: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id().to_string(),
            name: user.name().map(str::to_owned),
            email: user.email().map(str::to_owned),
        }
    }
}

/// Request body for `POST /users`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl From<CreateUserRequest> for UserDraft {
    fn from(value: CreateUserRequest) -> Self {
        Self {
            name: value.name,
            email: value.email,
        }
    }
}

/// Request body for `PUT /users/{id}`; absent or `null` fields are kept.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl From<UpdateUserRequest> for UserChanges {
    fn from(value: UpdateUserRequest) -> Self {
        Self {
            name: value.name,
            email: value.email,
        }
    }
}

fn parse_user_id(raw: &str) -> Result<UserId, Error> {
    UserId::new(raw).map_err(|err| {
        let code = match err {
            UserValidationError::EmptyId => "empty_id",
            UserValidationError::InvalidId => "invalid_id",
        };
        Error::invalid_request(err.to_string()).with_details(json!({
            "field": "id",
            "code": code,
        }))
    })
}

/// List every stored user.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use users_backend::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = [UserResponse]),
        (status = 503, description = "Document store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserResponse>>> {
    let users = state.users.list_users().await?;
    Ok(web::Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Create a user from the supplied fields.
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "Created user", body = UserResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 413, description = "Request body too large", body = ErrorSchema),
        (status = 503, description = "Document store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<web::Json<UserResponse>> {
    let user = state
        .users_command
        .create_user(payload.into_inner().into())
        .await?;
    Ok(web::Json(user.into()))
}

/// Overwrite the supplied fields of a user.
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated user, or null when no user has the id", body = Option<UserResponse>),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 413, description = "Request body too large", body = ErrorSchema),
        (status = 503, description = "Document store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> ApiResult<web::Json<Option<UserResponse>>> {
    let id = parse_user_id(&path)?;
    let user = state
        .users_command
        .update_user(&id, payload.into_inner().into())
        .await?;
    Ok(web::Json(user.map(UserResponse::from)))
}

/// Delete a user and return it as it was.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Deleted user, or null when no user has the id", body = Option<UserResponse>),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Document store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Option<UserResponse>>> {
    let id = parse_user_id(&path)?;
    let user = state.users_command.delete_user(&id).await?;
    Ok(web::Json(user.map(UserResponse::from)))
}
