#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # fkgrade
//! ## Introduction
//!
//! Grades text with the Flesch-Kincaid readability formula.
//!
//! `fkgrade serve` starts a web form on `FKGRADE_HOST:FKGRADE_PORT`
//! (`127.0.0.1:5000` by default). `fkgrade score essay.txt` grades a file from
//! the terminal; pass `-` or nothing to read stdin.

use std::{net::IpAddr, path::PathBuf};

use anyhow::Result;
use bpaf::*;
use dotenvy::dotenv;
use fkgrade::{cli, config, web};
use tracing::metadata::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Serve the web form
    Serve {
        /// Interface to bind, overriding `FKGRADE_HOST`
        host: Option<IpAddr>,
        /// Port to bind, overriding `FKGRADE_PORT`
        port: Option<u16>,
    },
    /// Grade a file or stdin
    Score {
        /// Print the report as JSON
        json: bool,
        /// File to read; stdin when absent or `-`
        file: Option<PathBuf>,
    },
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    let host = long("host")
        .help("Interface to listen on")
        .argument::<IpAddr>("HOST")
        .optional();
    let port = long("port")
        .short('p')
        .help("Port to listen on")
        .argument::<u16>("PORT")
        .optional();
    let serve = construct!(Cmd::Serve { host, port })
        .to_options()
        .command("serve")
        .help("Serve the readability web form");

    let json = long("json").help("Print the report as JSON").switch();
    let file = positional::<PathBuf>("FILE")
        .help("Text file to grade, or - for stdin")
        .optional();
    let score = construct!(Cmd::Score { json, file })
        .to_options()
        .command("score")
        .help("Print the Flesch-Kincaid grade level of a text");

    let cmd = construct!([serve, score]);

    cmd.to_options()
        .descr("Flesch-Kincaid grade level calculator")
        .run()
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let cfg = config::ensure_initialized();

    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false);
    let filter_layer = LevelFilter::from_level(cfg.log_level());
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    for warning in cfg.warnings() {
        tracing::warn!("{warning}");
    }

    match options() {
        Cmd::Serve { host, port } => {
            let addr = (*cfg).clone().with_overrides(host, port).socket_addr();
            web::serve(addr).await?;
        }
        Cmd::Score { json, file } => {
            println!("{}", cli::run_score(file.as_deref(), std::io::stdin(), json)?);
        }
    };

    Ok(())
}
