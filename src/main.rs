//! `dotlink` command-line entry point.

use anyhow::Result;

use dotlink::cli::{self, Command, Invocation};
use dotlink::{commands, logging};

#[allow(clippy::print_stdout)]
fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();

    let (args, command) = match cli::parse(std::env::args_os()) {
        Invocation::Run { cli, command } => (cli, command),
        Invocation::Usage(text) => {
            println!("{}", text.trim_end());
            return Ok(());
        }
    };

    if command == Command::Version {
        commands::version::run();
        return Ok(());
    }

    logging::init_subscriber(
        logging::console_level(args.verbose, args.global.json),
        command.name(),
    );
    let log = logging::Logger::new(command.name());

    match command {
        Command::Status => commands::status::run(&args.global, &log),
        Command::Link => commands::link::run(&args.global, &log),
        Command::Unlink => commands::unlink::run(&args.global, &log),
        Command::Version => Ok(()),
    }
}
