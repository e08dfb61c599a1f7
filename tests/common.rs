//! Common test utilities
//!
//! Shared functionality used across all test modules: a scripted transport
//! that records what was sent and replies from a queue, plus payload helpers.
// Common test utilities - all must be public

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::Arc;

use shiori::net::{GraphQlRequest, RawResponse, Transport};
use shiori::{Error, Repositories, Result};

/// Transport that answers from a queue of canned replies.
///
/// Once the queue is empty every further request gets a response with no
/// data and no errors.
#[derive(Default)]
pub struct FakeTransport {
    replies: Mutex<VecDeque<Result<RawResponse>>>,
    sent: Mutex<Vec<GraphQlRequest>>,
}

#[allow(dead_code)]
impl FakeTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queues a successful response with `data` as the payload.
    pub fn reply(self: &Arc<Self>, data: Value) -> Arc<Self> {
        self.replies.lock().push_back(Ok(RawResponse::data(data)));
        self.clone()
    }

    /// Queues a response carrying only schema errors.
    pub fn reply_errors(self: &Arc<Self>, messages: &[&str]) -> Arc<Self> {
        self.replies
            .lock()
            .push_back(Ok(RawResponse::errors(messages.iter().copied())));
        self.clone()
    }

    /// Queues a response with neither data nor errors.
    pub fn reply_empty(self: &Arc<Self>) -> Arc<Self> {
        self.replies.lock().push_back(Ok(RawResponse::default()));
        self.clone()
    }

    /// Queues a transport-level failure.
    pub fn fail(self: &Arc<Self>, error: Error) -> Arc<Self> {
        self.replies.lock().push_back(Err(error));
        self.clone()
    }

    pub fn sent(&self) -> Vec<GraphQlRequest> {
        self.sent.lock().clone()
    }

    pub fn last_sent(&self) -> GraphQlRequest {
        self.sent
            .lock()
            .last()
            .cloned()
            .expect("no request was sent")
    }

    pub fn repositories(self: &Arc<Self>) -> Repositories {
        Repositories::new(self.clone())
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn send(&self, request: &GraphQlRequest) -> Result<RawResponse> {
        self.sent.lock().push(request.clone());
        self.replies
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(RawResponse::default()))
    }
}

/// A minimal media node as the catalog returns it.
#[allow(dead_code)]
pub fn media_node(id: i32, title: &str) -> Value {
    json!({
        "id": id,
        "type": "ANIME",
        "format": "TV",
        "status": "FINISHED",
        "episodes": 12,
        "title": { "romaji": title, "userPreferred": title },
        "coverImage": { "large": format!("https://img.example/{id}.jpg") },
        "genres": ["Adventure", null, "Drama"],
        "isFavourite": false
    })
}

/// A `Page` payload holding `count` media nodes with ids starting at `first_id`.
#[allow(dead_code)]
pub fn media_page(first_id: i32, count: usize) -> Value {
    let media: Vec<Value> = (0..count as i32)
        .map(|offset| media_node(first_id + offset, &format!("Title {}", first_id + offset)))
        .collect();
    json!({ "Page": { "pageInfo": { "hasNextPage": count > 0 }, "media": media } })
}
