use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

/// Envelope wrapping resource payloads under a `data` key.
#[derive(Serialize, Deserialize)]
pub struct DataDto<T> {
    pub data: T,
}

/// Body returned by mutation endpoints that report only success.
#[derive(Serialize, Deserialize)]
pub struct UpdatedDto {
    pub updated: bool,
}

/// Body returned by delete endpoints.
#[derive(Serialize, Deserialize)]
pub struct DeletedDto {
    pub deleted: bool,
}
