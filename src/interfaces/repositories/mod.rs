pub mod dislike;
pub mod tuit;
pub mod user;
