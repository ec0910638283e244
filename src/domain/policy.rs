//! Per-platform argument policy for the extraction tool.
//!
//! Rules are evaluated top to bottom against the lowercased host; the first
//! rule with a matching host signal wins and [`DEFAULT_POLICY`] applies when
//! nothing matches.

/// Flags passed on every invocation: single JSON object, no media download.
pub const BASE_ARGS: &[&str] = &["-j", "--simulate", "--no-playlist"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionPolicy {
    pub name: &'static str,
    pub format: &'static str,
    pub force_ipv4: bool,
    pub retries: Option<u32>,
}

#[derive(Debug)]
pub struct PolicyRule {
    /// Substrings searched for in the host.
    pub host_signals: &'static [&'static str],
    pub policy: ExtractionPolicy,
}

impl PolicyRule {
    fn matches(&self, host: &str) -> bool {
        self.host_signals.iter().any(|signal| host.contains(signal))
    }
}

pub const POLICY_TABLE: &[PolicyRule] = &[
    PolicyRule {
        host_signals: &["youtube.com", "youtu.be"],
        policy: ExtractionPolicy {
            name: "youtube",
            format: "best[ext=mp4]/best",
            force_ipv4: false,
            retries: None,
        },
    },
    PolicyRule {
        host_signals: &["facebook.com", "fb.watch"],
        policy: ExtractionPolicy {
            name: "facebook",
            format: "b",
            force_ipv4: true,
            retries: Some(3),
        },
    },
    PolicyRule {
        host_signals: &["instagram.com"],
        policy: ExtractionPolicy {
            name: "instagram",
            format: "b",
            force_ipv4: false,
            retries: Some(3),
        },
    },
];

pub const DEFAULT_POLICY: ExtractionPolicy = ExtractionPolicy {
    name: "default",
    format: "best",
    force_ipv4: false,
    retries: None,
};

/// Picks the policy for a host, case-insensitively.
pub fn select(host: &str) -> &'static ExtractionPolicy {
    let host = host.to_ascii_lowercase();
    POLICY_TABLE
        .iter()
        .find(|rule| rule.matches(&host))
        .map(|rule| &rule.policy)
        .unwrap_or(&DEFAULT_POLICY)
}

impl ExtractionPolicy {
    /// Format selector, optionally capped to a maximum height with the
    /// uncapped selector kept as the last fallback.
    pub fn format_selector(&self, max_height: Option<u32>) -> String {
        match max_height {
            Some(height) => {
                let capped: Vec<String> = self
                    .format
                    .split('/')
                    .map(|alt| format!("{alt}[height<={height}]"))
                    .collect();
                format!("{}/{}", capped.join("/"), self.format)
            }
            None => self.format.to_string(),
        }
    }

    /// Full argument vector, target URL last.
    pub fn args(&self, url: &str, max_height: Option<u32>) -> Vec<String> {
        let mut args: Vec<String> = BASE_ARGS.iter().map(|arg| arg.to_string()).collect();
        args.push("-f".to_string());
        args.push(self.format_selector(max_height));
        if self.force_ipv4 {
            args.push("--force-ipv4".to_string());
        }
        if let Some(retries) = self.retries {
            args.push("--retries".to_string());
            args.push(retries.to_string());
        }
        args.push(url.to_string());
        args
    }
}

/// Reads a quality hint such as `"720"` or `"720p"` as a height cap.
pub fn parse_height(hint: &str) -> Option<u32> {
    let hint = hint.trim();
    let digits = hint
        .strip_suffix('p')
        .or_else(|| hint.strip_suffix('P'))
        .unwrap_or(hint);
    digits.parse::<u32>().ok().filter(|height| *height > 0)
}
