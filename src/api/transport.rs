use std::future::Future;
use std::pin::Pin;

use gloo_net::http::Request;

use crate::error::TransportError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub type ReplyFuture = Pin<Box<dyn Future<Output = Result<HttpReply, TransportError>>>>;

/// Moves one request over the wire. Implementations never interpret the body.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> ReplyFuture;
}

#[derive(Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    fn execute(&self, request: HttpRequest) -> ReplyFuture {
        Box::pin(async move {
            let response = match (request.method, request.body) {
                (Method::Get, _) => Request::get(&request.url).send().await,
                (Method::Post, body) => {
                    Request::post(&request.url)
                        .header("Content-Type", "application/json")
                        .body(body.unwrap_or_default())
                        .map_err(|e| TransportError(e.to_string()))?
                        .send()
                        .await
                }
            }
            .map_err(|e| TransportError(e.to_string()))?;

            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| TransportError(e.to_string()))?;
            Ok(HttpReply { status, body })
        })
    }
}
