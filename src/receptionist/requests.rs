use serde::Deserialize;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LogoutRequest {
    pub login_token: String,
}

#[derive(Deserialize)]
pub struct DashboardRequest {
    pub login_token: String,
}

#[derive(Deserialize)]
pub struct UpdateStatusRequest {
    pub id: u64,
    pub status: String,
}
