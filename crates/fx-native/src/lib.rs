pub mod script;
pub mod session;

pub use session::{replay, run, SessionOptions, SessionStats};
