use super::{check_failures, FilterArg};
use crate::util::{canonicalize_cli_path, plan_jobs, run_jobs};
use argh::FromArgs;
use dxt_rle_api::{file_io, EncodeSettingsBuilder};
use std::path::PathBuf;

#[derive(FromArgs, Debug)]
/// Encode DXT5 DDS files with explicit masks into RLES containers
#[argh(subcommand, name = "encode-mask")]
pub struct EncodeMaskCmd {
    /// input DDS file or directory
    #[argh(option, from_str_fn(canonicalize_cli_path))]
    pub input: PathBuf,

    /// mask file (PNG or BGRA DDS), or a directory mirroring the input directory
    #[argh(option, from_str_fn(canonicalize_cli_path))]
    pub mask: PathBuf,

    /// output container file or directory
    #[argh(option)]
    pub output: PathBuf,

    /// extension of masks looked up in a mask directory [default: png]
    #[argh(option, default = "String::from(\"png\")")]
    pub mask_extension: String,

    /// filter deriving lower mask mips from an image: box, nearest [default: box]
    #[argh(option, default = "FilterArg::Box")]
    pub filter: FilterArg,
}

pub fn handle_encode_mask_command(cmd: EncodeMaskCmd) -> Result<(), Box<dyn std::error::Error>> {
    let settings = EncodeSettingsBuilder::new()
        .filter(cmd.filter.into())
        .build();

    let jobs = plan_jobs(&cmd.input, &cmd.output, "rle")?;
    let failures = run_jobs("encode-mask", &jobs, |job| {
        let mask = if cmd.mask.is_dir() {
            // Mask directories mirror the input tree.
            let relative = job.input.strip_prefix(&cmd.input).unwrap_or(&job.input);
            cmd.mask.join(relative).with_extension(&cmd.mask_extension)
        } else {
            cmd.mask.clone()
        };
        file_io::encode_file_with_mask(&job.input, &mask, &job.output, &settings)
    });
    Ok(check_failures(failures)?)
}
