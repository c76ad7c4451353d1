use std::{env, io, process};

use console::style;
use define::{config, error::Error, logging, render};

fn main() {
    let cli = match config::parse_args(env::args_os()) {
        Ok(cli) => cli,
        Err(e) => {
            // clap renders its own usage, help and version text.
            if let Error::Usage(usage) = &e {
                let _ = usage.print();
                process::exit(e.exit_code());
            }
            fail(&e)
        }
    };
    logging::init(cli.debug);

    if let Err(e) = run(cli) {
        fail(&e);
    }
}

fn run(cli: config::Cli) -> define::error::Result<()> {
    let request = cli.into_request()?;
    tracing::debug!(word = %request.word, "looking up");
    let report = define::lookup(&request)?;

    let stdout = io::stdout();
    render::write_report(&report, &mut stdout.lock())?;
    Ok(())
}

fn fail(e: &Error) -> ! {
    eprintln!("{} {}", style("error:").red().bold(), e);
    process::exit(e.exit_code());
}
