pub mod run;

pub use run::{DEFAULT_BASE, run_command};
