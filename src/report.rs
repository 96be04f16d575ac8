use crate::WcountError;
use crate::runtime::RankedEntry;
use clap::ValueEnum;
use std::fmt::{self, Display};
use std::fs;
use std::io::{self, BufWriter, Write};
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::Builder;
use tracing::debug;

const INFIX: &str = "wcount";
const FALLBACK_EXTENSION: &str = "txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// One `word - count` line per entry.
    #[default]
    Plain,
    Json,
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Report file name for `input`: `name.ext` becomes `name.wcount.ext`,
/// and a name without an extension gets `.wcount.txt`.
///
/// Only the final path component is used; both `/` and `\` separate
/// components.
pub fn output_file_name(input: &str) -> String {
    let normalized = input.replace('\\', "/");
    let name = normalized.rsplit('/').next().unwrap_or_default();

    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => {
            format!("{stem}.{INFIX}.{ext}")
        }
        Some((stem, "")) if !stem.is_empty() => format!("{stem}.{INFIX}.{FALLBACK_EXTENSION}"),
        _ => format!("{name}.{INFIX}.{FALLBACK_EXTENSION}"),
    }
}

pub fn output_path(input: &Path, output_dir: &Path) -> PathBuf {
    output_dir.join(output_file_name(&input.to_string_lossy()))
}

/// Write the ranked entries to `path`.
///
/// The report goes to a temporary file next to `path` and is moved into
/// place once complete. A new report gets the usual `0666 & !umask` mode;
/// an existing report is replaced and keeps its mode.
pub fn write_report(
    path: &Path,
    entries: &[RankedEntry],
    format: OutputFormat,
) -> Result<(), WcountError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let create_failure = |source| WcountError::OutputCreateFailure {
        path: path.to_path_buf(),
        source,
    };
    let write_failure = |source| WcountError::OutputWriteFailure {
        path: path.to_path_buf(),
        source,
    };

    let mut builder = Builder::new();
    #[cfg(unix)]
    builder.permissions(fs::Permissions::from_mode(0o666));
    let temp_file = builder.tempfile_in(dir).map_err(create_failure)?;
    if let Ok(existing) = fs::metadata(path) {
        temp_file
            .as_file()
            .set_permissions(existing.permissions())
            .map_err(create_failure)?;
    }

    write_entries(BufWriter::new(temp_file.as_file()), entries, format).map_err(write_failure)?;

    temp_file
        .persist(path)
        .map_err(|e| create_failure(e.error))?;
    debug!("Wrote {} entries to {}", entries.len(), path.display());
    Ok(())
}

/// Render the entries in `format` and flush `writer`.
pub fn write_entries<W: Write>(
    mut writer: W,
    entries: &[RankedEntry],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Plain => {
            for entry in entries {
                writeln!(writer, "{} - {}", entry.word, entry.count)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, entries).map_err(io::Error::from)?;
            writeln!(writer)?;
        }
    }
    writer.flush()
}
