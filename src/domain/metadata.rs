use super::format::{format_duration, format_size};
use crate::error::PipelineError;
use serde::{Deserialize, Deserializer};

/// Metadata reported by the extraction tool for a single media item.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VideoMetadata {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub thumbnail: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub uploader: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub upload_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub webpage_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub format_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ext: String,
    #[serde(default)]
    pub filesize: Option<u64>,
    #[serde(default)]
    pub filesize_approx: Option<u64>,
    /// Seconds, fractional values allowed.
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration: f64,
    /// Direct playable link.
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub requested_formats: Vec<RequestedFormat>,
}

/// One stream of a merged format selection.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RequestedFormat {
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl VideoMetadata {
    /// Decodes the tool's stdout. Anything but a single JSON object fails.
    pub fn from_json(raw: &[u8]) -> Result<Self, PipelineError> {
        Ok(serde_json::from_slice(raw)?)
    }

    pub fn direct_url(&self) -> &str {
        if !self.url.is_empty() {
            return &self.url;
        }
        self.requested_formats
            .iter()
            .map(|format| format.url.as_str())
            .find(|url| !url.is_empty())
            .unwrap_or_default()
    }

    pub fn size_bytes(&self) -> u64 {
        self.filesize.or(self.filesize_approx).unwrap_or(0)
    }

    pub fn human_size(&self) -> String {
        format_size(self.size_bytes())
    }

    /// Duration truncated to whole seconds.
    pub fn human_duration(&self) -> String {
        format_duration(self.duration.max(0.0) as u64)
    }
}
