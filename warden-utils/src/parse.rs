/// Parse a signed whole-day count like `30`, `+7`, `0` or `-1`.
///
/// Only plain integers are accepted; unit suffixes and fractions are rejected.
pub fn parse_days(raw: &str) -> Option<i64> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    value.parse::<i64>().ok()
}

/// Parse an on/off flag: `1|true|yes|on` or `0|false|no|off`, case-insensitive.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Parse an RGB color written as `0xRRGGBB`, `#RRGGBB` or bare `RRGGBB` hex.
pub fn parse_color(raw: &str) -> Option<u32> {
    let value = raw.trim();
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .or_else(|| value.strip_prefix('#'))
        .unwrap_or(value);

    if digits.is_empty() || digits.len() > 6 {
        return None;
    }

    u32::from_str_radix(digits, 16).ok()
}

/// Parse a comma separated list of numeric ids, skipping blank entries.
pub fn parse_id_list(raw: &str) -> Option<Vec<u32>> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| part.parse::<u32>().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{parse_color, parse_days, parse_flag, parse_id_list};

    #[test]
    fn parses_signed_day_counts() {
        assert_eq!(parse_days("30"), Some(30));
        assert_eq!(parse_days(" 0 "), Some(0));
        assert_eq!(parse_days("-3"), Some(-3));
        assert_eq!(parse_days("+7"), Some(7));
        assert_eq!(parse_days("7d"), None);
        assert_eq!(parse_days("1.5"), None);
        assert_eq!(parse_days(""), None);
    }

    #[test]
    fn parses_flags() {
        assert_eq!(parse_flag("Yes"), Some(true));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
        assert_eq!(parse_flag(""), None);
    }

    #[test]
    fn parses_hex_colors() {
        assert_eq!(parse_color("0xFFFFFF"), Some(0xFF_FFFF));
        assert_eq!(parse_color("#0088ff"), Some(0x00_88FF));
        assert_eq!(parse_color("00FF00"), Some(0x00_FF00));
        assert_eq!(parse_color("0x1000000"), None);
        assert_eq!(parse_color("blue"), None);
        assert_eq!(parse_color("0x"), None);
    }

    #[test]
    fn parses_id_lists() {
        assert_eq!(parse_id_list("1, 2,3"), Some(vec![1, 2, 3]));
        assert_eq!(parse_id_list(""), Some(Vec::new()));
        assert_eq!(parse_id_list("1,,2"), Some(vec![1, 2]));
        assert_eq!(parse_id_list("1,x"), None);
    }
}
