mod config;
mod msg;
mod stream;

pub use config::*;
pub use msg::*;
pub use stream::*;
