use serde::Serialize;

#[derive(Default, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub err: String,
    pub login_token: String,
}

#[derive(Serialize)]
pub struct AppointmentItem {
    pub id: u64,
    pub date: String,
    pub time: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub category: String,
    pub reason: String,
    pub status: String,
    pub document_url: Option<String>,
    pub designated_attendee: String,
}

#[derive(Default, Serialize)]
pub struct DashboardResponse {
    pub success: bool,
    pub err: String,
    pub appointments: Vec<AppointmentItem>,
}

#[derive(Serialize)]
pub struct AppointmentsResponse {
    pub appointments: Vec<AppointmentItem>,
}

#[derive(Serialize)]
pub struct UpdateStatusResponse {
    pub success: bool,
    pub message: String,
}

crate::impl_err_response! {
    LoginResponse,
    DashboardResponse,
}
