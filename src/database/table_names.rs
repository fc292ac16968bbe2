pub const USER_TABLE_NAME: &'static str = "local_user";
pub const TUIT_TABLE_NAME: &'static str = "tuit";
pub const DISLIKE_TABLE_NAME: &'static str = "dislike";
