use serde::Serialize;

#[derive(Default, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub err: String,
    pub login_token: String,
}

#[derive(Serialize)]
pub struct ReceptionistItem {
    pub id: u64,
    pub username: String,
    pub is_approved: bool,
    pub created_at: String,
}

#[derive(Default, Serialize)]
pub struct ApprovalResponse {
    pub success: bool,
    pub err: String,
    pub receptionists: Vec<ReceptionistItem>,
}

crate::impl_err_response! {
    LoginResponse,
    ApprovalResponse,
}
