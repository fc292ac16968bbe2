pub mod ctx;
pub mod error;
pub mod identity;
pub mod mw_ctx;
pub mod utils;
