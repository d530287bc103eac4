use crate::error::CliError;
use crate::util::Throughput;
use bytesize::ByteSize;
use dxt_rle_api::file_io::FileOperationResult;
#[cfg(feature = "multithreaded")]
use rayon::prelude::*;
use std::fs;
use std::path::*;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Instant;

/// One input file and the output it produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Recursively visits directories and collects entries.
///
/// Directories or entries that cannot be read are skipped.
pub fn find_all_files(dir: &Path, entries: &mut Vec<PathBuf>) -> std::io::Result<()> {
    // Gracefully handle cases where the directory cannot be read
    let dir_entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return Ok(()), // Silently return if directory can't be read
    };

    for entry in dir_entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(_) => continue, // Skip problematic entries, e.g. those without access.
        };

        let path = entry.path();
        if path.is_dir() {
            // Recursively collect files.
            find_all_files(&path, entries)?;
        } else {
            entries.push(path);
        }
    }
    Ok(())
}

/// Canonicalizes a CLI input path, which must exist.
pub fn canonicalize_cli_path(value: &str) -> Result<PathBuf, String> {
    fs::canonicalize(Path::new(value)).map_err(|e| format!("Invalid path {value}: {e}"))
}

/// Pairs every input with its output path.
///
/// - A file input maps to `output` itself, or to `output/<name>.<extension>`
///   when `output` is an existing directory.
/// - A directory input maps each file below it to the same relative path
///   under `output`, with its extension replaced by `extension`.
pub fn plan_jobs(input: &Path, output: &Path, extension: &str) -> Result<Vec<Job>, CliError> {
    if !input.is_dir() {
        let output = if output.is_dir() {
            let name = input
                .file_name()
                .ok_or_else(|| CliError::OutsideInput(input.to_path_buf()))?;
            output.join(name).with_extension(extension)
        } else {
            output.to_path_buf()
        };
        return Ok(vec![Job {
            input: input.to_path_buf(),
            output,
        }]);
    }

    let mut files = Vec::new();
    find_all_files(input, &mut files)?;
    files.sort();

    files
        .into_iter()
        .map(|file| {
            let relative = file
                .strip_prefix(input)
                .map_err(|_| CliError::OutsideInput(file.clone()))?;
            let output = output.join(relative).with_extension(extension);
            Ok(Job {
                input: file,
                output,
            })
        })
        .collect()
}

/// Runs `operation` over every job, in parallel when multithreaded.
///
/// Each failure is logged and counted; the returned value is the number of
/// failed jobs.
pub fn run_jobs<F>(name: &str, jobs: &[Job], operation: F) -> usize
where
    F: Fn(&Job) -> FileOperationResult<()> + Sync,
{
    tracing::info!(files = jobs.len(), "{name}: starting");
    let start = Instant::now();
    let bytes_processed = AtomicU64::new(0);
    let failures = AtomicUsize::new(0);

    let process = |job: &Job| {
        let result = run_job(job, &operation, &bytes_processed);
        handle_job_result(job, result, &failures);
    };

    #[cfg(feature = "multithreaded")]
    jobs.par_iter().for_each(process);
    #[cfg(not(feature = "multithreaded"))]
    jobs.iter().for_each(process);

    let elapsed = start.elapsed();
    let total_bytes = bytes_processed.load(Ordering::Relaxed);
    let failures = failures.load(Ordering::Relaxed);
    tracing::info!(
        files = jobs.len(),
        failures,
        "{name}: completed in {elapsed:.2?}, {} processed, {}",
        ByteSize(total_bytes),
        Throughput::measure(total_bytes, elapsed)
    );
    failures
}

fn run_job<F>(job: &Job, operation: &F, bytes_processed: &AtomicU64) -> Result<(), CliError>
where
    F: Fn(&Job) -> FileOperationResult<()>,
{
    // Create output directory if needed
    if let Some(parent) = job.output.parent() {
        fs::create_dir_all(parent)?;
    }

    operation(job).map_err(|source| CliError::FileOperation {
        path: job.input.clone(),
        source,
    })?;

    if let Ok(metadata) = fs::metadata(&job.input) {
        bytes_processed.fetch_add(metadata.len(), Ordering::Relaxed);
    }
    Ok(())
}

fn handle_job_result(job: &Job, result: Result<(), CliError>, failures: &AtomicUsize) {
    match result {
        Ok(()) => tracing::debug!(
            input = %job.input.display(),
            output = %job.output.display(),
            "processed"
        ),
        Err(error) => {
            failures.fetch_add(1, Ordering::Relaxed);
            tracing::warn!(error = %error, "failed to process file");
        }
    }
}
