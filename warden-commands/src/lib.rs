pub mod vip;

#[cfg(test)]
mod testing;

pub use vip::{handle_vip_command, should_route_to_vip};

pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[vip::command::SETVIP_META, vip::command::REMOVEVIP_META];
