pub mod roster;
pub mod vip;
