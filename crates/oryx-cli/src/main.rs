use std::process;

fn main() {
    process::exit(oryx_cli::run());
}
