pub mod dislikes;
