//! Build-time configuration of the front-end.
//!
//! The bundle is static, so the API address is baked in when compiling:
//! `EXAMS_API_URL=https://api.example.com trunk build`.

use common::config::ApiConfig;
use common::ApiError;

pub fn api_config() -> Result<ApiConfig, ApiError> {
    ApiConfig::from_override(option_env!("EXAMS_API_URL"))
        .map_err(|err| ApiError::InvalidUrl(err.to_string()))
}
