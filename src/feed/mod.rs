// SPDX-License-Identifier: MPL-2.0
//! Home feed model and HTTP client.
//!
//! The feed is a flat JSON document of videos with their channels. All
//! failures surface as typed [`Error`] values; nothing here panics or
//! retries. Loading on behalf of the player goes through
//! [`loader::VideoLoader`], which reports completions as player events.

pub mod loader;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// A channel a video belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub name: String,
    #[serde(rename = "profileImageURL")]
    pub profile_image_url: String,
}

/// One feed entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub title: String,
    #[serde(rename = "numberOfViews")]
    pub number_of_views: u64,
    #[serde(rename = "thumbnailURL")]
    pub thumbnail_url: String,
    #[serde(rename = "videoURL")]
    pub video_url: String,
    pub channel: Channel,
}

#[derive(Debug, Deserialize)]
struct FeedDocument {
    videos: Vec<Video>,
}

/// Parses a feed document, rejecting empty feeds as [`Error::DataNotFound`].
pub fn parse_feed(body: &str) -> Result<Vec<Video>> {
    let document: FeedDocument = serde_json::from_str(body)?;
    if document.videos.is_empty() {
        return Err(Error::DataNotFound);
    }
    Ok(document.videos)
}

/// HTTP client for the feed endpoint and playlist/text resources.
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: reqwest::Client,
}

impl Default for FeedClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedClient {
    #[must_use]
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    /// Fetches and parses the home feed.
    pub async fn fetch_feed(&self, url: &str) -> Result<Vec<Video>> {
        let body = self.fetch_text(url).await?;
        parse_feed(&body)
    }

    /// Fetches a text resource (master playlist, description).
    pub async fn fetch_text(&self, url: &str) -> Result<String> {
        let url = Url::parse(url)?;
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus(status.as_u16()));
        }
        Ok(response.text().await?)
    }

    /// Fetches raw bytes (thumbnail and profile images).
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let url = Url::parse(url)?;
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus(status.as_u16()));
        }
        Ok(response.bytes().await?.to_vec())
    }
}
