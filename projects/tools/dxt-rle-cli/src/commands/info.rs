use crate::util::{canonicalize_cli_path, find_all_files};
use argh::FromArgs;
use bytesize::ByteSize;
use dxt_rle_api::file_io;
use dxt_rle_api::ContainerInfo;
use std::path::{Path, PathBuf};

#[derive(FromArgs, Debug)]
/// Print the layout of containers
#[argh(subcommand, name = "info")]
pub struct InfoCmd {
    /// input container file or directory
    #[argh(option, from_str_fn(canonicalize_cli_path))]
    pub input: PathBuf,
}

pub fn handle_info_command(cmd: InfoCmd) -> Result<(), Box<dyn std::error::Error>> {
    let mut files = Vec::new();
    if cmd.input.is_dir() {
        find_all_files(&cmd.input, &mut files)?;
        files.sort();
    } else {
        files.push(cmd.input.clone());
    }

    for file in &files {
        match file_io::inspect_file(file) {
            Ok(info) => print_info(file, &info),
            Err(error) => tracing::warn!(path = %file.display(), error = %error, "not a container"),
        }
    }
    Ok(())
}

fn print_info(path: &Path, info: &ContainerInfo) {
    let header = &info.header;
    println!("{}", path.display());
    println!(
        "  {:?} {:?} {}x{}, {} mips, {} ({:?})",
        header.format,
        header.variant,
        header.width,
        header.height,
        header.mip_count,
        ByteSize(info.size as u64),
        info.layout().kind,
    );

    for (level, mip) in info.mips.iter().enumerate() {
        println!(
            "  mip {level:>2}: {:>5}x{:<5} commands {:>6} @ {:#010X} ({} bytes), skip {:>6}, mixed {:>6}, full {:>6}",
            mip.dimensions.0,
            mip.dimensions.1,
            mip.commands,
            mip.descriptor.command,
            mip.command_bytes,
            mip.skip_blocks,
            mip.mixed_blocks,
            mip.full_blocks,
        );
        let streams: Vec<String> = info
            .layout()
            .channels
            .iter()
            .enumerate()
            .map(|(index, spec)| {
                format!(
                    "{} @ {:#010X} ({} bytes)",
                    spec.channel, mip.descriptor.channels[index], mip.channel_bytes[index]
                )
            })
            .collect();
        println!("          {}", streams.join(", "));
    }
}
