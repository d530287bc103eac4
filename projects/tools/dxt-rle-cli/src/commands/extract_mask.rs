use super::check_failures;
use crate::util::{canonicalize_cli_path, plan_jobs, run_jobs};
use argh::FromArgs;
use dxt_rle_api::file_io;
use std::path::PathBuf;

#[derive(FromArgs, Debug)]
/// Extract the masks of RLES containers as BGRA DDS files or PNG images
#[argh(subcommand, name = "extract-mask")]
pub struct ExtractMaskCmd {
    /// input container file or directory
    #[argh(option, from_str_fn(canonicalize_cli_path))]
    pub input: PathBuf,

    /// output file or directory; a file ending in .png receives mip 0 as an image
    #[argh(option)]
    pub output: PathBuf,

    /// write PNG images instead of DDS files when extracting a directory
    #[argh(switch)]
    pub png: bool,
}

pub fn handle_extract_mask_command(
    cmd: ExtractMaskCmd,
) -> Result<(), Box<dyn std::error::Error>> {
    let extension = if cmd.png { "png" } else { "dds" };
    let jobs = plan_jobs(&cmd.input, &cmd.output, extension)?;
    let failures = run_jobs("extract-mask", &jobs, |job| {
        file_io::extract_mask_file(&job.input, &job.output)
    });
    Ok(check_failures(failures)?)
}
