use std::env;

use tracing::warn;

use crate::parse::{parse_color, parse_flag, parse_id_list};

/// Read one variable from the process environment.
pub fn process_var(key: &str) -> Option<String> {
    env::var(key).ok()
}

pub fn env_bool(key: &str, default: bool) -> bool {
    bool_var(process_var, key, default)
}

/// `1|true|yes|on` and `0|false|no|off` (any case); anything else warns and keeps `default`.
pub fn bool_var(vars: impl Fn(&str) -> Option<String>, key: &str, default: bool) -> bool {
    match vars(key) {
        Some(value) => parse_flag(&value).unwrap_or_else(|| {
            warn!(
                env_key = key,
                value = %value,
                default = default,
                "invalid flag in environment; using default"
            );
            default
        }),
        None => default,
    }
}

pub fn i64_var(vars: impl Fn(&str) -> Option<String>, key: &str, default: i64) -> i64 {
    match vars(key) {
        Some(value) => value.trim().parse::<i64>().unwrap_or_else(|_| {
            warn!(
                env_key = key,
                value = %value,
                default = default,
                "invalid integer in environment; using default"
            );
            default
        }),
        None => default,
    }
}

pub fn color_var(vars: impl Fn(&str) -> Option<String>, key: &str, default: u32) -> u32 {
    match vars(key) {
        Some(value) => parse_color(&value).unwrap_or_else(|| {
            warn!(
                env_key = key,
                value = %value,
                default = default,
                "invalid color in environment; using default"
            );
            default
        }),
        None => default,
    }
}

pub fn id_list_var(vars: impl Fn(&str) -> Option<String>, key: &str) -> Vec<u32> {
    match vars(key) {
        Some(value) => parse_id_list(&value).unwrap_or_else(|| {
            warn!(env_key = key, value = %value, "invalid id list in environment; ignoring");
            Vec::new()
        }),
        None => Vec::new(),
    }
}
