use super::check_failures;
use crate::util::{canonicalize_cli_path, plan_jobs, run_jobs};
use argh::FromArgs;
use dxt_rle_api::file_io;
use std::path::PathBuf;

#[derive(FromArgs, Debug)]
/// Decode containers into DDS files
#[argh(subcommand, name = "decode")]
pub struct DecodeCmd {
    /// input container file or directory
    #[argh(option, from_str_fn(canonicalize_cli_path))]
    pub input: PathBuf,

    /// output DDS file or directory
    #[argh(option)]
    pub output: PathBuf,
}

pub fn handle_decode_command(cmd: DecodeCmd) -> Result<(), Box<dyn std::error::Error>> {
    let jobs = plan_jobs(&cmd.input, &cmd.output, "dds")?;
    let failures = run_jobs("decode", &jobs, |job| {
        file_io::decode_file(&job.input, &job.output)
    });
    Ok(check_failures(failures)?)
}
