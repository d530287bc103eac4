use dxt_rle_api::file_io::FileOperationError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("{path}: {source}")]
    FileOperation {
        path: PathBuf,
        #[source]
        source: FileOperationError,
    },
    #[error("{0} is not inside the input directory")]
    OutsideInput(PathBuf),
    #[error("{0} file(s) failed to process")]
    Failed(usize),
}
