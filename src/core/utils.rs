// Author: Dustin Pilgrim
// License: MIT

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Wall clock in milliseconds since the UNIX epoch.
pub fn now_ms() -> u64 {
    let d = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::from_secs(0));
    d.as_millis() as u64
}

/// Countdown text: "45s", "2m 05s".
pub fn format_seconds(secs: u64) -> String {
    if secs < 60 {
        format!("{secs}s")
    } else {
        format!("{}m {:02}s", secs / 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_short_and_long_countdowns() {
        assert_eq!(format_seconds(0), "0s");
        assert_eq!(format_seconds(59), "59s");
        assert_eq!(format_seconds(60), "1m 00s");
        assert_eq!(format_seconds(125), "2m 05s");
        assert_eq!(format_seconds(360), "6m 00s");
    }
}
