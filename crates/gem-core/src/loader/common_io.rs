// crates/gem-core/src/loader/common_io.rs
use crate::error::{GemError, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMode {
    Gzip,
    None,
}

impl CompressionMode {
    /// Gzip for `*.gz` paths, plain otherwise.
    pub fn for_path(path: &Path) -> Self {
        if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz")) {
            CompressionMode::Gzip
        } else {
            CompressionMode::None
        }
    }
}

/// Opens a file, buffers it, and wraps it in a Gzip decoder for `*.gz` paths.
/// Returns a generic Reader so the caller doesn't care about the compression.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        GemError::NotFound(format!("File not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    match CompressionMode::for_path(path) {
        CompressionMode::None => Ok(Box::new(reader)),
        CompressionMode::Gzip => {
            #[cfg(feature = "compact")]
            {
                Ok(Box::new(GzDecoder::new(reader)))
            }
            #[cfg(not(feature = "compact"))]
            {
                Err(GemError::InvalidData(format!(
                    "{} is gzip-compressed but 'compact' is disabled",
                    path.display()
                )))
            }
        }
    }
}

/// Write `body` to `path` through a sibling temp file that is renamed into
/// place once everything has been flushed.
pub fn write_atomically<F>(path: &Path, body: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let tmp_path = temp_path_for(path);

    let result = (|| -> Result<()> {
        let file = File::create(&tmp_path)?;
        let mut writer = BufWriter::new(file);

        match CompressionMode::for_path(path) {
            CompressionMode::Gzip => {
                #[cfg(feature = "compact")]
                {
                    let mut encoder = GzEncoder::new(writer, Compression::default());
                    body(&mut encoder)?;
                    // finish() writes the gzip trailer; a plain flush does not.
                    encoder.finish()?.flush()?;
                }
                #[cfg(not(feature = "compact"))]
                {
                    return Err(GemError::InvalidData(
                        "Gzip requested but 'compact' disabled".into(),
                    ));
                }
            }
            CompressionMode::None => {
                body(&mut writer)?;
                writer.flush()?;
            }
        }

        std::fs::rename(&tmp_path, path)?;
        Ok(())
    })();

    if result.is_err() {
        let _ = std::fs::remove_file(&tmp_path);
    }
    result
}

fn temp_path_for(path: &Path) -> PathBuf {
    let filename = path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{filename}.tmp"))
}
