mod clean;
mod install;
mod remove;
mod replace;
mod search;

pub use clean::cmd_clean;
pub use install::cmd_install;
pub use remove::cmd_remove;
pub use replace::cmd_replace;
pub use search::cmd_search;
