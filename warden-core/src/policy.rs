use tracing::warn;
use warden_utils::env::{bool_var, color_var, i64_var, id_list_var, process_var};

use crate::player::DEFAULT_COLOR;

pub const DEFAULT_REQUIRED_LEVEL: i32 = 100;
pub const DEFAULT_VIP_COLOR: u32 = 0x00_88FF;

/// Whose VIP status decides if the target gets recolored on a grant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecolorGate {
    /// The issuing actor must already be VIP. Matches long-standing server behavior.
    Actor,
    /// The target's freshly granted status is used.
    Target,
}

/// Process-wide VIP policy. Built once at startup and never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VipPolicy {
    pub required_level: i32,
    pub override_privilege_check: bool,
    pub name_color_enabled: bool,
    pub name_color: u32,
    pub title_color_enabled: bool,
    pub title_color: u32,
    pub default_color: u32,
    pub vip_abilities: Vec<u32>,
    pub recolor_gate: RecolorGate,
}

impl Default for VipPolicy {
    fn default() -> Self {
        Self {
            required_level: DEFAULT_REQUIRED_LEVEL,
            override_privilege_check: false,
            name_color_enabled: true,
            name_color: DEFAULT_VIP_COLOR,
            title_color_enabled: true,
            title_color: DEFAULT_VIP_COLOR,
            default_color: DEFAULT_COLOR,
            vip_abilities: Vec::new(),
            recolor_gate: RecolorGate::Actor,
        }
    }
}

impl VipPolicy {
    /// Read the policy from the process environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_vars(process_var)
    }

    /// Build the policy from any variable source; unset or invalid values keep defaults.
    pub fn from_vars(vars: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let required_level = i64_var(&vars, "GM_VIP", i64::from(defaults.required_level));
        let required_level = i32::try_from(required_level).unwrap_or_else(|_| {
            warn!(
                env_key = "GM_VIP",
                value = required_level,
                default = defaults.required_level,
                "access level out of range; using default"
            );
            defaults.required_level
        });

        Self {
            required_level,
            override_privilege_check: bool_var(
                &vars,
                "ALT_PRIVILEGES_ADMIN",
                defaults.override_privilege_check,
            ),
            name_color_enabled: bool_var(&vars, "ALLOW_VIP_NCOLOR", defaults.name_color_enabled),
            name_color: color_var(&vars, "VIP_NCOLOR", defaults.name_color),
            title_color_enabled: bool_var(&vars, "ALLOW_VIP_TCOLOR", defaults.title_color_enabled),
            title_color: color_var(&vars, "VIP_TCOLOR", defaults.title_color),
            default_color: DEFAULT_COLOR,
            vip_abilities: id_list_var(&vars, "VIP_SKILLS"),
            recolor_gate: if bool_var(&vars, "VIP_RECOLOR_BY_TARGET", false) {
                RecolorGate::Target
            } else {
                RecolorGate::Actor
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{DEFAULT_REQUIRED_LEVEL, DEFAULT_VIP_COLOR, RecolorGate, VipPolicy};

    fn policy_from(pairs: &[(&str, &str)]) -> VipPolicy {
        let map: HashMap<&str, &str> = pairs.iter().copied().collect();
        VipPolicy::from_vars(|key| map.get(key).map(|value| (*value).to_owned()))
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(policy_from(&[]), VipPolicy::default());
    }

    #[test]
    fn reads_every_setting() {
        let policy = policy_from(&[
            ("GM_VIP", "75"),
            ("ALT_PRIVILEGES_ADMIN", "true"),
            ("ALLOW_VIP_NCOLOR", "off"),
            ("VIP_NCOLOR", "0x112233"),
            ("ALLOW_VIP_TCOLOR", "no"),
            ("VIP_TCOLOR", "#445566"),
            ("VIP_SKILLS", "7041,7042"),
            ("VIP_RECOLOR_BY_TARGET", "1"),
        ]);

        assert_eq!(policy.required_level, 75);
        assert!(policy.override_privilege_check);
        assert!(!policy.name_color_enabled);
        assert_eq!(policy.name_color, 0x11_2233);
        assert!(!policy.title_color_enabled);
        assert_eq!(policy.title_color, 0x44_5566);
        assert_eq!(policy.vip_abilities, vec![7041, 7042]);
        assert_eq!(policy.recolor_gate, RecolorGate::Target);
    }

    #[test]
    fn invalid_values_keep_defaults() {
        let policy = policy_from(&[
            ("ALLOW_VIP_NCOLOR", "maybe"),
            ("ALLOW_VIP_TCOLOR", "sometimes"),
            ("GM_VIP", "5000000000"),
            ("VIP_NCOLOR", "teal"),
        ]);

        assert!(policy.name_color_enabled);
        assert!(policy.title_color_enabled);
        assert_eq!(policy.required_level, DEFAULT_REQUIRED_LEVEL);
        assert_eq!(policy.name_color, DEFAULT_VIP_COLOR);
    }
}
