use serde::{Deserialize, Serialize};

// Registration request
#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

// Login request and response
#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub user_id: i64,
}

// Plain message response, shared by register/logout and the stub routes
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}
