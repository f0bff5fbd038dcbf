//! progdash - command-line companion for the AI Literacy program dashboard

use clap::{CommandFactory, Parser};
use clap_complete::CompleteEnv;

mod cli;
mod client;
mod config;
mod error;
mod guard;
mod models;
mod output;
mod program;
mod query;
mod session;

use cli::Cli;
use cli::Commands;
use cli::args::GlobalOptions;
use error::Result;

#[tokio::main]
async fn main() {
    // Answers `COMPLETE=<shell> progdash` and exits; a no-op otherwise
    CompleteEnv::with_factory(Cli::command).complete();

    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_module("progdash", log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Login { email, password } => cli::auth::login(&opts, email, password).await,
        Commands::Logout => cli::auth::logout(&opts),
        Commands::Status => cli::status::run(&opts),
        Commands::Route { path } => cli::route::run(&opts, &path),
        Commands::Version => {
            println!("progdash version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Admin(cmd) => cli::admin::run(&opts, cmd).await,
        Commands::Sponsor(cmd) => cli::sponsor::run(&opts, cmd).await,
        Commands::Trainer(cmd) => cli::trainer::run(&opts, cmd).await,
        Commands::Completion { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "progdash",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}
