use serde::Deserialize;

#[derive(Deserialize)]
pub struct Step1Request {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub category: String,
}

#[derive(Deserialize)]
pub struct Step2Request {
    pub step_token: String,
    pub date: String,
    pub time: String,
    pub attendee: String,
    pub reason: String,
    #[serde(default)]
    pub document_url: Option<String>,
}

#[derive(Deserialize)]
pub struct RescheduleRequest {
    pub date: String,
    pub time: String,
    pub attendee: String,
    #[serde(default)]
    pub reason: Option<String>,
}
