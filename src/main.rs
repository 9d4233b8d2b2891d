#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod api;
mod cache;
mod cli;
mod core;
mod prelude;
mod quantity;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command},
    prelude::*,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Monitor(args) => cli::monitor(&args).await,
        Command::Community(args) => {
            cli::community(&args);
            Ok(())
        }
        Command::Donate(args) => {
            cli::donate(&args);
            Ok(())
        }
        Command::ReliefCenter(args) => cli::relief_center(&args).await,
    }
}
