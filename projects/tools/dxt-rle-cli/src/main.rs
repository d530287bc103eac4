#![allow(unexpected_cfgs)]
#![cfg(not(tarpaulin_include))]

mod commands;
mod error;
mod util;
use argh::FromArgs;
use core::error::Error;
use tracing_subscriber::EnvFilter;

#[derive(FromArgs, Debug)]
/// Converts between DDS files and run-length texture containers
struct TopLevel {
    #[argh(subcommand)]
    command: Commands,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    Decode(commands::decode::DecodeCmd),
    Encode(commands::encode::EncodeCmd),
    EncodeMask(commands::encode_mask::EncodeMaskCmd),
    ExtractMask(commands::extract_mask::ExtractMaskCmd),
    Info(commands::info::InfoCmd),
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli: TopLevel = argh::from_env();

    match cli.command {
        Commands::Decode(cmd) => commands::decode::handle_decode_command(cmd)?,
        Commands::Encode(cmd) => commands::encode::handle_encode_command(cmd)?,
        Commands::EncodeMask(cmd) => commands::encode_mask::handle_encode_mask_command(cmd)?,
        Commands::ExtractMask(cmd) => commands::extract_mask::handle_extract_mask_command(cmd)?,
        Commands::Info(cmd) => commands::info::handle_info_command(cmd)?,
    }

    Ok(())
}
