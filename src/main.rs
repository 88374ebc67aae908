use clap::Parser;
use kvconf::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
