// SPDX-License-Identifier: MPL-2.0
//! HLS master-playlist handling.
//!
//! Parses `#EXT-X-STREAM-INF` entries into stream variants and collapses
//! them into one entry per resolution, keeping the highest-bandwidth
//! variant for each bucket. Variant playlists themselves are opaque to this
//! crate; the host decoder consumes the chosen URL.

use crate::error::{Error, Result};
use std::collections::HashMap;
use url::Url;

const STREAM_INF_PREFIX: &str = "#EXT-X-STREAM-INF:";

/// One renderable stream option from a master playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamVariant {
    /// Peak bandwidth in bits per second.
    pub bandwidth: u64,
    /// Frame size as (width, height), when the playlist declares one.
    pub resolution: Option<(u32, u32)>,
    /// Absolute variant playlist URL.
    pub url: String,
}

impl StreamVariant {
    /// Human-readable label for the resolution picker ("720p", "audio").
    #[must_use]
    pub fn label(&self) -> String {
        match self.resolution {
            Some((_, height)) => format!("{}p", height),
            None => "audio".to_string(),
        }
    }
}

/// Parses a master playlist, deduplicating variants by resolution.
///
/// Relative variant URIs are resolved against `base_url`. Entries without a
/// `BANDWIDTH` attribute default to 0 and lose dedup ties. The output is
/// sorted by descending pixel count, resolution-less variants last; its
/// length never exceeds the number of distinct resolutions in the input.
pub fn parse_master_playlist(content: &str, base_url: &str) -> Result<Vec<StreamVariant>> {
    let base = Url::parse(base_url)?;
    let lines: Vec<&str> = content.lines().collect();
    let mut variants = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i].trim();
        if let Some(info) = line.strip_prefix(STREAM_INF_PREFIX) {
            let (bandwidth, resolution) = parse_stream_inf(info);
            // The URI is the next non-blank, non-tag line; unrelated tags
            // (#EXT-X-MEDIA and friends) may sit in between. Another
            // stream description first means this entry has no URI.
            let uri_line = lines[i + 1..]
                .iter()
                .map(|l| l.trim())
                .filter(|l| !l.is_empty())
                .take_while(|l| !l.starts_with(STREAM_INF_PREFIX))
                .find(|l| !l.starts_with('#'));
            if let Some(uri_line) = uri_line {
                let url = base.join(uri_line)?.to_string();
                variants.push(StreamVariant {
                    bandwidth,
                    resolution,
                    url,
                });
            }
        }
        i += 1;
    }

    if variants.is_empty() {
        return Err(Error::DataNotFound);
    }
    Ok(dedupe_by_resolution(variants))
}

fn parse_stream_inf(info: &str) -> (u64, Option<(u32, u32)>) {
    let mut bandwidth = 0;
    let mut resolution = None;
    for attr in split_attributes(info) {
        let Some((key, value)) = attr.split_once('=') else {
            continue;
        };
        match key.trim() {
            "BANDWIDTH" => bandwidth = value.trim().parse().unwrap_or(0),
            "RESOLUTION" => {
                if let Some((w, h)) = value.trim().split_once('x') {
                    if let (Ok(w), Ok(h)) = (w.parse::<u32>(), h.parse::<u32>()) {
                        resolution = Some((w, h));
                    }
                }
            }
            _ => {}
        }
    }
    (bandwidth, resolution)
}

/// Splits an attribute list on commas, honoring quoted values
/// (`CODECS="avc1.4d401f,mp4a.40.2"` is a single attribute).
fn split_attributes(info: &str) -> Vec<&str> {
    let mut attributes = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;
    for (idx, ch) in info.char_indices() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                attributes.push(&info[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    attributes.push(&info[start..]);
    attributes
}

fn dedupe_by_resolution(variants: Vec<StreamVariant>) -> Vec<StreamVariant> {
    let mut best: HashMap<Option<(u32, u32)>, StreamVariant> = HashMap::new();
    for variant in variants {
        match best.get(&variant.resolution) {
            Some(existing) if existing.bandwidth >= variant.bandwidth => {}
            _ => {
                best.insert(variant.resolution, variant);
            }
        }
    }
    let mut deduped: Vec<StreamVariant> = best.into_values().collect();
    deduped.sort_by(|a, b| {
        let pixels = |v: &StreamVariant| v.resolution.map(|(w, h)| u64::from(w) * u64::from(h));
        pixels(b).cmp(&pixels(a)).then(b.bandwidth.cmp(&a.bandwidth))
    });
    deduped
}
