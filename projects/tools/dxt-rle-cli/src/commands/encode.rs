use super::{check_failures, VariantArg};
use crate::util::{canonicalize_cli_path, plan_jobs, run_jobs};
use argh::FromArgs;
use dxt_rle_api::{file_io, EncodeSettingsBuilder};
use std::path::PathBuf;

#[derive(FromArgs, Debug)]
/// Encode DXT5 or L8 DDS files into containers
#[argh(subcommand, name = "encode")]
pub struct EncodeCmd {
    /// input DDS file or directory
    #[argh(option, from_str_fn(canonicalize_cli_path))]
    pub input: PathBuf,

    /// output container file or directory
    #[argh(option)]
    pub output: PathBuf,

    /// container variant: rle2, rles [default: rle2]
    #[argh(option, default = "VariantArg::Rle2")]
    pub variant: VariantArg,
}

pub fn handle_encode_command(cmd: EncodeCmd) -> Result<(), Box<dyn std::error::Error>> {
    let settings = EncodeSettingsBuilder::new()
        .variant(cmd.variant.into())
        .build();

    let jobs = plan_jobs(&cmd.input, &cmd.output, "rle")?;
    let failures = run_jobs("encode", &jobs, |job| {
        file_io::encode_file_with_settings(&job.input, &job.output, &settings)
    });
    Ok(check_failures(failures)?)
}
