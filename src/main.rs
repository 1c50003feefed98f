//! Chatlens CLI entry point.

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use chatlens::cli::Args;
use chatlens::{output, ChatParser, Messenger};

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> chatlens::Result<()> {
    let messenger: Messenger = args.messenger.parse()?;
    let table = ChatParser::new().parse_file(Path::new(&args.input), messenger)?;

    if args.stats {
        println!("records:      {}", table.len());
        println!("participants: {}", table.participants().join(", "));
        let media: u64 = table.media_counts().values().sum();
        println!("media lines:  {media}");
        return Ok(());
    }

    output::write_csv(&table, Path::new(&args.output))?;
    println!(
        "Wrote {} records from {} participants to {}",
        table.len(),
        table.participants().len(),
        args.output
    );
    Ok(())
}
