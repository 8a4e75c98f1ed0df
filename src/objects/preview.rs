use super::nullable;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelSummary {
    pub title: String,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub thumbnail: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub thumbnail: String,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub published_at: String,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub duration: String,
    pub url: String,
}

/// Response of `GET /preview/:feed_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preview {
    pub channel: ChannelSummary,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub videos: Vec<Video>,
}
