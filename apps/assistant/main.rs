use std::process::ExitCode;
use clap::Parser;
use log::{error, info, LevelFilter};
use reedline::{Reedline, Signal};

mod prompt;
use prompt::MyPrompt;

use addrbook::{
    configuration as cfg,
    logger,
    Assistant,
    AddressBookBuilder,
    CsvStorage,
    Reply,
    assistant::GOODBYE,
};

#[derive(Parser, Debug)]
#[command(about = "Interactive contacts assistant", long_about = None)]
struct Options {
    /// The configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// The contacts file
    #[arg(short, long, value_name = "CSV")]
    file: Option<String>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let opts = Options::parse();

    let mut builder = cfg::Builder::new();
    if let Some(path) = opts.config.as_ref() {
        if let Err(e) = builder.load(path) {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    }
    if let Some(file) = opts.file.as_ref() {
        builder.with_data_file(file);
    }
    if opts.verbose {
        builder.with_log_level(LevelFilter::Debug);
    }

    let cfg = match builder.build() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    #[cfg(feature = "inspect")] {
        cfg.dump();
    }

    if let Err(e) = logger::setup(cfg.log_level(), cfg.log_file()) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    let storage = match CsvStorage::open(cfg.data_file()) {
        Ok(v) => v,
        Err(e) => {
            error!("{e}");
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let book = match AddressBookBuilder::new().with_storage(Box::new(storage)).build() {
        Ok(v) => v,
        Err(e) => {
            error!("{e}");
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    info!("Address book loaded with {} contacts", book.len());

    let mut assistant = Assistant::new(book);
    let mut rl = Reedline::create();
    let prompt = MyPrompt;

    println!("{}", assistant.welcome());

    loop {
        let sig = match rl.read_line(&prompt) {
            Ok(v) => v,
            Err(e) => {
                error!("Reading input error: {e}");
                println!("\n Fatal error occurred.");
                break;
            }
        };

        match sig {
            Signal::Success(line) => match assistant.execute(&line) {
                Reply::Continue(text) => println!("{}", text),
                Reply::Quit(text) => {
                    println!("{}", text);
                    break;
                }
                Reply::Empty => continue,
            },
            Signal::CtrlC | Signal::CtrlD => {
                println!("\n{}", GOODBYE);
                break;
            }
        }
    }

    // Dropping the book closes the contacts file.
    drop(assistant);
    logger::teardown();
    ExitCode::SUCCESS
}
