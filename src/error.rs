use std::fmt::{Debug, Display};
use std::io::Error as IoError;

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError, UrlencodedError};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use derivative::Derivative;
use mongodb::error::Error as DatabaseError;
use serde::{Serialize, Serializer};

use crate::campaign::CampaignId;

#[derive(Debug, Serialize, Derivative)]
#[derivative(PartialEq)]
#[serde(untagged)]
pub enum Error {
    // 400
    #[serde(serialize_with = "display")]
    InvalidJson(#[derivative(PartialEq = "ignore")] JsonPayloadError),
    #[serde(serialize_with = "display")]
    InvalidPath(#[derivative(PartialEq = "ignore")] PathError),
    #[serde(serialize_with = "display")]
    InvalidForm(#[derivative(PartialEq = "ignore")] UrlencodedError),
    #[serde(serialize_with = "display")]
    InvalidQuery(#[derivative(PartialEq = "ignore")] QueryPayloadError),
    CampaignNameTooShort {
        name: String,
    },
    CampaignCostNotPositive {
        cost: f64,
    },
    CampaignRevenueNegative {
        revenue: f64,
    },

    // 404
    PathDoesNotExist,

    // 500
    InvalidStoreState(String),
    StoreReturnedMismatchedRecord {
        campaign_id: CampaignId,
    },
    #[serde(serialize_with = "display")]
    FailedDatabaseCall(#[derivative(PartialEq = "ignore")] DatabaseError),
    #[serde(serialize_with = "display")]
    IoError(#[derivative(PartialEq = "ignore")] IoError),
}

impl Error {
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::InvalidJson(_) => "E4001000",
            Error::InvalidPath(_) => "E4001001",
            Error::InvalidForm(_) => "E4001002",
            Error::InvalidQuery(_) => "E4001003",
            Error::CampaignNameTooShort { .. } => "E4001004",
            Error::CampaignCostNotPositive { .. } => "E4001005",
            Error::CampaignRevenueNegative { .. } => "E4001006",
            Error::PathDoesNotExist => "E4041000",
            Error::InvalidStoreState(_) => "E5001000",
            Error::StoreReturnedMismatchedRecord { .. } => "E5001001",
            Error::FailedDatabaseCall(_) => "E5001002",
            Error::IoError(_) => "E5001003",
        }
    }

    pub fn error_message(&self) -> &'static str {
        match self {
            Error::InvalidJson(_) => "The given json could not be parsed",
            Error::InvalidPath(_) => "The given path could not be parsed",
            Error::InvalidForm(_) => "The given form could not be parsed",
            Error::InvalidQuery(_) => "The given query could not be parsed",
            Error::CampaignNameTooShort { .. } => {
                "The campaign name must be at least 2 characters"
            }
            Error::CampaignCostNotPositive { .. } => {
                "The campaign cost must be greater than zero"
            }
            Error::CampaignRevenueNegative { .. } => {
                "The campaign revenue must not be negative"
            }
            Error::PathDoesNotExist => "The requested path was not found",
            Error::InvalidStoreState(_) => "The campaign store is in an invalid state",
            Error::StoreReturnedMismatchedRecord { .. } => {
                "The campaign store returned a record that does not match what was sent"
            }
            Error::FailedDatabaseCall(_) => {
                "An error occurred when communicating with the campaign store"
            }
            Error::IoError(_) => "An error occurred during an I/O operation",
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidJson(_) => StatusCode::BAD_REQUEST,
            Error::InvalidPath(_) => StatusCode::BAD_REQUEST,
            Error::InvalidForm(_) => StatusCode::BAD_REQUEST,
            Error::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            Error::CampaignNameTooShort { .. } => StatusCode::BAD_REQUEST,
            Error::CampaignCostNotPositive { .. } => StatusCode::BAD_REQUEST,
            Error::CampaignRevenueNegative { .. } => StatusCode::BAD_REQUEST,
            Error::PathDoesNotExist => StatusCode::NOT_FOUND,
            Error::InvalidStoreState(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::StoreReturnedMismatchedRecord { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Error::FailedDatabaseCall(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::IoError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        #[derive(Serialize)]
        struct Dummy<'a> {
            error_code: &'static str,
            error_message: &'static str,
            error_meta: &'a Error,
        }

        HttpResponse::build(self.status_code()).json(&Dummy {
            error_code: self.error_code(),
            error_message: self.error_message(),
            error_meta: self,
        })
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        Debug::fmt(self, f)
    }
}

impl From<DatabaseError> for Error {
    fn from(error: DatabaseError) -> Error {
        Error::FailedDatabaseCall(error)
    }
}

impl From<IoError> for Error {
    fn from(error: IoError) -> Error {
        Error::IoError(error)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidJson(err) => Some(err),
            Error::InvalidPath(err) => Some(err),
            Error::InvalidForm(err) => Some(err),
            Error::InvalidQuery(err) => Some(err),
            Error::FailedDatabaseCall(err) => Some(err),
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

fn display<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Display,
    S: Serializer,
{
    serializer.collect_str(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_map_to_bad_request() {
        let error = Error::CampaignCostNotPositive { cost: 0.0 };
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(error.error_code(), "E4001005");
    }

    #[test]
    fn store_failures_map_to_internal_server_error() {
        let error = Error::InvalidStoreState("campaign counter is missing".to_string());
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.error_code(), "E5001000");
    }

    #[test]
    fn error_meta_serializes_the_offending_fields() {
        let error = Error::CampaignNameTooShort {
            name: "x".to_string(),
        };
        let meta = serde_json::to_value(&error).unwrap();
        assert_eq!(meta, serde_json::json!({ "name": "x" }));
    }
}
