use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use super::transport::HttpReply;
use crate::error::{ApiError, DecodeError};

/// Every backend reply carries `status` and, on failure, usually `message`.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}

pub fn interpret<T>(endpoint: &str, reply: &HttpReply) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let value: Value = match serde_json::from_str(&reply.body) {
        Ok(value) => value,
        Err(_) => {
            log::warn!(
                "{} answered HTTP {} with a non-JSON body",
                endpoint,
                reply.status
            );
            return Err(ApiError::InvalidJson);
        }
    };

    let envelope = Envelope::deserialize(&value).unwrap_or(Envelope {
        status: None,
        message: None,
    });
    let success = envelope.status.as_deref() == Some("success");
    if !reply.ok() || !success {
        log::warn!(
            "{} rejected (HTTP {}): {}",
            endpoint,
            reply.status,
            envelope.message.as_deref().unwrap_or("no message")
        );
        return Err(ApiError::Rejected {
            status: reply.status,
            message: envelope.message,
        });
    }

    T::deserialize(value).map_err(|err| {
        let err = DecodeError {
            endpoint: endpoint.to_string(),
            reason: err.to_string(),
        };
        log::warn!("{}", err);
        ApiError::Decode(err)
    })
}
