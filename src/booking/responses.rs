use serde::Serialize;

#[derive(Default, Serialize)]
pub struct Step1Response {
    pub success: bool,
    pub err: String,
    pub step_token: String,
}

#[derive(Default, Serialize)]
pub struct RescheduleViewResponse {
    pub success: bool,
    pub err: String,
    pub name: String,
    pub date: String,
    pub time: String,
    pub attendee: String,
    pub reason: String,
}

crate::impl_err_response! {
    Step1Response,
    RescheduleViewResponse,
}
