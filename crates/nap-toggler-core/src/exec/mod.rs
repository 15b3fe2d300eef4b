mod applescript;
mod runner;

pub use {
    applescript::{applescript_escape, privileged_script},
    runner::{CommandRunner, SystemCommandRunner},
};
