/// Format an RGB color as `0xRRGGBB`.
pub fn format_color(color: u32) -> String {
    format!("0x{:06X}", color & 0xFF_FFFF)
}

/// Format a day count the way admin broadcasts show it (e.g. "30 day(s)").
pub fn format_days(days: i64) -> String {
    format!("{} day(s)", days)
}

#[cfg(test)]
mod tests {
    use super::{format_color, format_days};

    #[test]
    fn colors_are_zero_padded_uppercase() {
        assert_eq!(format_color(0xFF_FFFF), "0xFFFFFF");
        assert_eq!(format_color(0x88ff), "0x0088FF");
    }

    #[test]
    fn day_labels() {
        assert_eq!(format_days(30), "30 day(s)");
        assert_eq!(format_days(1), "1 day(s)");
    }
}
