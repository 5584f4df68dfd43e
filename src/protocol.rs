use serde::Serialize;
use std::fmt;

#[derive(Default, Serialize)]
pub struct SimpleResponse {
    pub success: bool,
    pub err: String,
}

impl SimpleResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            err: "".to_string(),
        }
    }
}

#[macro_export]
macro_rules! impl_err_response {
    ( $( $type:ty),+ $(,)? ) => {
        $(
            impl $type {
                pub fn err<S: ToString>(err: S) -> Self {
                    Self {
                        success: false,
                        err: err.to_string(),
                        ..Default::default()
                    }
                }
            }
        )+
    };
}

impl_err_response! {
    SimpleResponse,
}

/// Marker error for lookups that must surface as HTTP 404 instead of the
/// uniform envelope. Carried inside anyhow and recovered by downcast.
#[derive(Debug)]
pub struct NotFound(pub &'static str);

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for NotFound {}
