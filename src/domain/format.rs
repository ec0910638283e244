//! Human-readable size and duration strings shown to clients.

const MIB: f64 = 1024.0 * 1024.0;

/// Formats a byte count as mebibytes with two decimals, e.g. `"1.50 MB"`.
pub fn format_size(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / MIB)
}

/// Formats whole seconds as `minutes:seconds`, e.g. `"2:05"`.
pub fn format_duration(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(1_572_864), "1.50 MB");
        assert_eq!(format_size(0), "0.00 MB");
        assert_eq!(format_size(1024 * 1024), "1.00 MB");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(125), "2:05");
        assert_eq!(format_duration(59), "0:59");
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(3600), "60:00");
    }
}
