use censory::cli::Cli;
use censory::logging::init_logging;
use censory::{ask_wordlist_path, Censor, Denylist, Session};
use clap::Parser;
use std::io;
use std::process;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli.log_level) {
        eprintln!("{}", e);
        process::exit(1);
    }

    if let Err(e) = run(&cli) {
        tracing::debug!(error = ?e, "exiting after fatal error");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> censory::Result<()> {
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    let path = match &cli.wordlist {
        Some(path) => path.clone(),
        None => ask_wordlist_path(&mut input, &mut output)?,
    };
    let denylist = Denylist::open(&path)?.with_mask_char(cli.mask);
    tracing::info!(entries = denylist.len(), "starting session");

    let mut censor = Censor::new(&denylist);
    censor.with_boundaries(cli.boundaries());
    Session::new(censor, input, output).run()
}
