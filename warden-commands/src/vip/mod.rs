//! `admin_setvip` / `admin_removevip`: grant or revoke time-limited VIP status.
//!
//! A command flows through [`access::AccessGate`], then
//! [`target::TargetResolver`], then [`lifecycle::VipLifecycle`], which persists
//! the new state and fans out notifications through [`notify::Notifier`].

pub mod access;
pub mod command;
pub mod dispatch;
pub mod lifecycle;
pub mod notify;
pub mod target;

pub use dispatch::{VipOutcome, execute_vip_command, handle_vip_command, should_route_to_vip};
