mod config;
mod establishment;
mod session;

pub use self::config::*;
pub use self::establishment::*;
pub use self::session::*;
