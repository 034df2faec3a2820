//! Lineup CLI Client
//!
//! Command-line interface for talking to a Lineup server.

use std::io::Write;

use clap::{Parser, Subcommand};
use lineup_client::{CallArgs, Client, Reply, DEFAULT_PORT};
use tracing_subscriber::{fmt, EnvFilter};

/// Lineup CLI
#[derive(Parser, Debug)]
#[command(name = "lineup-cli")]
#[command(about = "CLI for the Lineup priority message queue")]
#[command(version)]
struct Args {
    /// Server hostname
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Server port
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Enqueue a message with a priority
    Give {
        /// Message priority
        priority: u32,

        /// Message body
        data: String,

        /// Override the declared payload size (normally computed)
        #[arg(long)]
        size: Option<usize>,
    },

    /// Dequeue the highest-priority message (raw bytes to stdout)
    Take,

    /// Ping the server
    Ping,

    /// Send an arbitrary verb as a simple command
    Raw {
        /// The verb to send
        verb: String,
    },
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    let mut client = match Client::connect(&args.host, args.port) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to connect to {}:{}: {}", args.host, args.port, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&mut client, args.command) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(client: &mut Client, command: Commands) -> lineup_client::Result<()> {
    match command {
        Commands::Give {
            priority,
            data,
            size,
        } => {
            let ack = client.give(priority, data.into_bytes(), size)?;
            println!("{ack}");
        }
        Commands::Take => {
            let message = client.take()?;
            std::io::stdout().write_all(&message)?;
        }
        Commands::Ping => {
            println!("{}", client.ping()?);
        }
        Commands::Raw { verb } => match client.call(&verb, CallArgs::None)? {
            Reply::Inline(value) => println!("{value}"),
            Reply::Bulk(data) => std::io::stdout().write_all(&data)?,
            // call() maps error replies to Err, so this arm is never hit
            Reply::Error(message) => eprintln!("-{message}"),
        },
    }
    Ok(())
}
