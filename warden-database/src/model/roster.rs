#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RosterEntry {
    pub player_id: u32,
    pub name: String,
    pub access_level: i32,
    pub is_gm: bool,
}
