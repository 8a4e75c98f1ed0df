use super::nullable;
use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub id: String,
    pub channel_id: String,
    pub title: String,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub thumbnail: String,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub subscriber_count: u64,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub video_count: u64,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub updated_at: String,
}

/// Body of `POST /api/channels`.
///
/// `channel_id` may hold a raw channel URL; the server resolves it and fills in the counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewChannel {
    pub channel_id: String,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub subscriber_count: u64,
    pub video_count: u64,
}

/// Body of `PUT /api/channels/:id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelUpdate {
    pub title: String,
    pub description: String,
    pub thumbnail: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChannelsEnvelope {
    pub channels: Vec<Channel>,
}

impl Channel {
    pub fn matches(&self, needle_lowercase: &str) -> bool {
        self.title.to_lowercase().contains(needle_lowercase)
            || self.description.to_lowercase().contains(needle_lowercase)
    }

    pub fn updated_on(&self) -> String {
        format_date(&self.updated_at)
    }
}

/// Formats a server timestamp as e.g. "Mar 7, 2024".
///
/// The server emits naive ISO timestamps; offsets are accepted as well. Anything unparsable is
/// shown verbatim.
pub fn format_date(timestamp: &str) -> String {
    let date = match DateTime::parse_from_rfc3339(timestamp) {
        Ok(date) => date.naive_local(),
        Err(_) => match NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f") {
            Ok(date) => date,
            Err(_) => return timestamp.to_string(),
        },
    };

    date.format("%b %-d, %Y").to_string()
}

/// Renders a count with thousands separators, e.g. `1234567` as "1,234,567".
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut res = String::with_capacity(digits.len() + digits.len() / 3);

    for (idx, digit) in digits.chars().enumerate() {
        if idx != 0 && (digits.len() - idx) % 3 == 0 {
            res.push(',');
        }
        res.push(digit);
    }

    res
}
