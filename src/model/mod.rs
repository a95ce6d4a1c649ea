mod auth;
mod query;
mod ranking;

pub use auth::*;
pub use query::*;
pub use ranking::*;
