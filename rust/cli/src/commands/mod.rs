//! Command handler modules for the Callbreak CLI.
//!
//! Each subcommand lives in its own module with the same shape:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Settings arrive already resolved (`&Config`), so handlers never read the environment for them
//! - Output streams (`&mut dyn Write`) and stdin (`&mut dyn BufRead`) are passed in
//! - Errors propagate as `CliError`; [`crate::run`] turns them into exit codes

mod cfg;
mod deal;
mod play;
mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::{PlayOptions, handle_play_command};
pub use sim::{SimOptions, handle_sim_command};
