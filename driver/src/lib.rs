pub mod argparser;
mod commands;
pub mod config;
pub mod console;
mod driver;
mod error;
pub mod info;
pub mod program;
mod session;

pub use self::config::{BuildMode, Options};
pub use self::driver::{run_bubble, run_bubble_with, WELCOME_MESSAGE};
pub use self::error::DriverError;
pub use self::program::{ExitStatus, Invocation, ProcessRunner, SystemRunner};
pub use self::session::{Outcome, Session};
