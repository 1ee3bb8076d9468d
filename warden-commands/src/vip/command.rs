use warden_core::ParseError;
use warden_utils::parse::parse_days;

use crate::CommandMeta;

pub const SETVIP_META: CommandMeta = CommandMeta {
    name: "admin_setvip",
    desc: "Grant VIP status for a number of days; zero or fewer days removes it.",
    category: "admin",
    usage: "//setvip [<char_name>] <days>",
};

pub const REMOVEVIP_META: CommandMeta = CommandMeta {
    name: "admin_removevip",
    desc: "Remove VIP status.",
    category: "admin",
    usage: "//removevip [<char_name>]",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VipVerb {
    SetVip,
    RemoveVip,
}

impl VipVerb {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "admin_setvip" => Some(Self::SetVip),
            "admin_removevip" => Some(Self::RemoveVip),
            _ => None,
        }
    }

    /// The verb a raw command line starts with, if it is one of ours.
    pub fn detect(raw: &str) -> Option<Self> {
        raw.split_whitespace().next().and_then(Self::from_token)
    }

    pub fn meta(self) -> &'static CommandMeta {
        match self {
            Self::SetVip => &SETVIP_META,
            Self::RemoveVip => &REMOVEVIP_META,
        }
    }
}

/// A fully parsed VIP command. `target: None` means "resolve from context".
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VipCommand {
    SetVip { target: Option<String>, days: i64 },
    RemoveVip { target: Option<String> },
}

impl VipCommand {
    pub fn verb(&self) -> VipVerb {
        match self {
            Self::SetVip { .. } => VipVerb::SetVip,
            Self::RemoveVip { .. } => VipVerb::RemoveVip,
        }
    }

    pub fn explicit_target(&self) -> Option<&str> {
        match self {
            Self::SetVip { target, .. } | Self::RemoveVip { target } => target.as_deref(),
        }
    }
}

/// Parse a whitespace separated command line.
///
/// `admin_setvip <days>` / `admin_setvip <name> <days>` and
/// `admin_removevip` / `admin_removevip <name>`; anything else is rejected.
pub fn parse_command(raw: &str) -> Result<VipCommand, ParseError> {
    let mut tokens = raw.split_whitespace();
    let head = tokens.next().unwrap_or_default();
    let Some(verb) = VipVerb::from_token(head) else {
        return Err(ParseError::UnknownVerb(head.to_owned()));
    };
    let args: Vec<&str> = tokens.collect();

    match (verb, args.as_slice()) {
        (VipVerb::SetVip, [days]) => Ok(VipCommand::SetVip {
            target: None,
            days: parse_days_token(days)?,
        }),
        (VipVerb::SetVip, [name, days]) => Ok(VipCommand::SetVip {
            target: Some((*name).to_owned()),
            days: parse_days_token(days)?,
        }),
        (VipVerb::RemoveVip, []) => Ok(VipCommand::RemoveVip { target: None }),
        (VipVerb::RemoveVip, [name]) => Ok(VipCommand::RemoveVip {
            target: Some((*name).to_owned()),
        }),
        (verb, args) => Err(ParseError::TokenCount {
            verb: verb.meta().name,
            found: args.len(),
        }),
    }
}

fn parse_days_token(raw: &str) -> Result<i64, ParseError> {
    parse_days(raw).ok_or_else(|| ParseError::InvalidDuration(raw.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::{VipCommand, VipVerb, parse_command};
    use warden_core::ParseError;

    #[test]
    fn setvip_with_name_and_days() {
        assert_eq!(
            parse_command("admin_setvip Bob 30"),
            Ok(VipCommand::SetVip {
                target: Some("Bob".to_owned()),
                days: 30,
            })
        );
    }

    #[test]
    fn setvip_single_token_is_the_duration() {
        assert_eq!(
            parse_command("  admin_setvip   -2 "),
            Ok(VipCommand::SetVip {
                target: None,
                days: -2,
            })
        );
    }

    #[test]
    fn setvip_rejects_bad_shapes() {
        assert_eq!(
            parse_command("admin_setvip"),
            Err(ParseError::TokenCount {
                verb: "admin_setvip",
                found: 0,
            })
        );
        assert_eq!(
            parse_command("admin_setvip Bob 30 extra"),
            Err(ParseError::TokenCount {
                verb: "admin_setvip",
                found: 3,
            })
        );
        assert_eq!(
            parse_command("admin_setvip Bob"),
            Err(ParseError::InvalidDuration("Bob".to_owned()))
        );
        assert_eq!(
            parse_command("admin_setvip Bob 3d"),
            Err(ParseError::InvalidDuration("3d".to_owned()))
        );
    }

    #[test]
    fn removevip_shapes() {
        assert_eq!(
            parse_command("admin_removevip"),
            Ok(VipCommand::RemoveVip { target: None })
        );
        assert_eq!(
            parse_command("admin_removevip Bob")
                .map(|command| command.explicit_target().map(str::to_owned)),
            Ok(Some("Bob".to_owned()))
        );
        assert_eq!(
            parse_command("admin_removevip Bob Alice"),
            Err(ParseError::TokenCount {
                verb: "admin_removevip",
                found: 2,
            })
        );
    }

    #[test]
    fn other_verbs_are_not_ours() {
        assert_eq!(
            parse_command("admin_setvipx 3"),
            Err(ParseError::UnknownVerb("admin_setvipx".to_owned()))
        );
        assert_eq!(VipVerb::detect("admin_kick Bob"), None);
        assert_eq!(VipVerb::detect("admin_removevip"), Some(VipVerb::RemoveVip));
        assert_eq!(parse_command(""), Err(ParseError::UnknownVerb(String::new())));
    }
}
