use caustic_syntax::cli::{self, CliError, InspectOptions, PathOptions};
use clap::{Parser as ClapParser, Subcommand};
use std::io::{self, Read};
use tracing::info;

#[derive(ClapParser)]
#[command(name = "caustic")]
#[command(about = "Caustic - build and inspect transaction trees")]
#[command(version)]
struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a wire transaction and summarize it
    Inspect {
        /// Transaction JSON (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Indent the rendered tree
        #[arg(short, long)]
        pretty: bool,
    },

    /// Print the key expression that resolves a record path
    Path {
        /// Root record key
        root: String,

        /// Attribute names below the root
        segments: Vec<String>,

        /// Print wire JSON instead of call notation
        #[arg(long)]
        json: bool,

        /// Indent the output
        #[arg(short, long)]
        pretty: bool,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new(format!("caustic={0},caustic_syntax={0}", level))
                }),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Inspect { input, pretty } => run_inspect(input, pretty),
        Commands::Path {
            root,
            segments,
            json,
            pretty,
        } => cli::execute_path(&PathOptions {
            root,
            segments,
            json,
            pretty,
        })
        .map(|rendered| println!("{}", rendered)),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_inspect(input: Option<String>, pretty: bool) -> Result<(), CliError> {
    let input = match input {
        Some(s) => Some(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Some(buffer)
        }
        None => None,
    };

    let report = cli::execute_inspect(&InspectOptions { input, pretty })?;
    info!(depth = report.depth, nodes = report.nodes, "inspected transaction");
    println!("{}", report);
    Ok(())
}
