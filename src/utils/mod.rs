pub mod jwt;
pub mod keyed_locks;
