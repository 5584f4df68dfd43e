use serde::Deserialize;

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
pub struct ApprovalRequest {
    pub login_token: String,
}

#[derive(Deserialize)]
pub struct ApproveRequest {
    pub login_token: String,
    pub id: u64,
}

#[derive(Deserialize)]
pub struct RejectRequest {
    pub login_token: String,
    pub id: u64,
}
