//! Input URL canonicalization before extraction.

use crate::error::PipelineError;
use crate::ports::resolver::RedirectResolver;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;
use url::Url;

/// Share and shortener links that only redirect to the real resource.
static SHORT_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^https?://(?:(?:www|m|web)\.)?(?:facebook\.com/share/[rvp]/|fb\.watch/|vm\.tiktok\.com/|vt\.tiktok\.com/)",
    )
    .expect("short link pattern is valid")
});

/// Hosts whose share URLs carry analytics parameters.
const TRACKING_HOSTS: &[&str] = &["instagram.com", "facebook.com"];

const TRACKING_PARAMS: &[&str] = &[
    "igshid",
    "igsh",
    "fbclid",
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_term",
    "utm_content",
];

pub fn is_short_link(raw: &str) -> bool {
    SHORT_LINK.is_match(raw)
}

fn has_tracking_host(url: &Url) -> bool {
    url.host_str()
        .map(|host| host.to_ascii_lowercase())
        .is_some_and(|host| TRACKING_HOSTS.iter().any(|h| host.contains(h)))
}

/// Removes known tracking parameters, leaving every other pair intact.
pub fn strip_tracking_params(url: &mut Url) {
    if url.query().is_none() || !has_tracking_host(url) {
        return;
    }

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| !TRACKING_PARAMS.iter().any(|param| key == param))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    if kept.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(kept);
    }
}

fn parse_absolute(input: &str) -> Result<Url, PipelineError> {
    let url = Url::parse(input).map_err(|e| PipelineError::InvalidUrl(format!("{input:?}: {e}")))?;
    match url.scheme() {
        "http" | "https" if url.has_host() => Ok(url),
        _ => Err(PipelineError::InvalidUrl(format!(
            "{input:?}: expected an absolute http(s) URL"
        ))),
    }
}

/// Canonicalizes a raw client URL: trims it, resolves share links through
/// `resolver`, strips tracking parameters and validates the result.
pub async fn normalize<R>(raw: &str, resolver: &R) -> Result<Url, PipelineError>
where
    R: RedirectResolver + ?Sized,
{
    let mut candidate = raw.trim().to_string();

    if is_short_link(&candidate) {
        let resolved = resolver
            .resolve(&candidate)
            .await
            .map_err(|source| PipelineError::RedirectResolution {
                url: candidate.clone(),
                source,
            })?;
        debug!(from = %candidate, to = %resolved, "resolved share link");
        candidate = resolved;
    }

    let mut url = parse_absolute(&candidate)?;
    strip_tracking_params(&mut url);
    Ok(url)
}
