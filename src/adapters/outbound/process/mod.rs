/// Process adapters running external tools (dpkg, sbomnix)
mod command;
mod dpkg_client;
mod sbomnix_runner;

pub use command::{CommandError, CommandRunner};
pub use dpkg_client::DpkgClient;
pub use sbomnix_runner::{SbomnixRunner, DEFAULT_SBOMNIX_PATH};
