#![warn(rust_2018_idioms)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub use config::{version_text, Args, Config, Verbosity, PROG};
pub use echo_sender::{EchoSender, Pinger};
pub use runner::Runner;
pub use send_error::{ConfigError, SendError};
pub use task::{Destination, EchoTask};

mod config;
mod echo_sender;
pub mod icmp;
pub mod logging;
pub mod runner;
mod send_error;
pub mod task;
