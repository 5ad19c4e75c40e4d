use greymagick::{args, help};
use std::error::Error;

fn main() {
    env_logger::init();
    help::maybe_print_help_and_exit("greymagick");

    if let Err(e) = real_main() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), Box<dyn Error>> {
    let arguments: Vec<_> = std::env::args_os().collect();
    let plan = args::parse_args(arguments)?;
    plan.execute()?;
    Ok(())
}
