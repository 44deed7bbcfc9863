//! File pipeline: read a BMP from disk, write its grayscale version to
//! `new.bmp`, or render it as ASCII art.

use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use enough::{Stop, Unstoppable};
use tempfile::NamedTempFile;

use crate::ascii::render_ascii;
use crate::bmp::BmpHeaders;
use crate::decode::{DecodeRequest, DecodedBitmap};
use crate::encode::convert_dyn;
use crate::error::BmpError;
use crate::limits::Limits;

/// Name of the converted file, always written to the current directory.
pub const OUTPUT_FILE_NAME: &str = "new.bmp";

/// Outcome of a successful [`GrayscaleRequest::convert`].
#[derive(Clone, Debug)]
pub struct Conversion {
    /// Headers of the input, as written to the output.
    pub headers: BmpHeaders,
    /// Where the grayscale image was written.
    pub output: PathBuf,
}

/// Builder for converting one BMP file on disk.
#[derive(Clone, Debug)]
pub struct GrayscaleRequest<'a> {
    input: &'a Path,
    limits: Option<&'a Limits>,
}

impl<'a> GrayscaleRequest<'a> {
    pub fn new(input: &'a Path) -> Self {
        Self {
            input,
            limits: None,
        }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Read and decode the input without converting it.
    pub fn decode(&self, stop: impl Stop) -> Result<DecodedBitmap, BmpError> {
        let data = self.read_input()?;
        let mut request = DecodeRequest::new(&data);
        if let Some(limits) = self.limits {
            request = request.with_limits(limits);
        }
        request.decode(stop)
    }

    /// Convert the input and write [`OUTPUT_FILE_NAME`] in the current
    /// directory, replacing any existing file.
    pub fn convert(&self, stop: impl Stop) -> Result<Conversion, BmpError> {
        self.convert_in(Path::new("."), &stop)
    }

    /// ASCII rendering of the input, one line per row.
    pub fn render_ascii(&self, stop: impl Stop) -> Result<Vec<String>, BmpError> {
        let bitmap = self.decode(stop)?;
        Ok(render_ascii(&bitmap.grid))
    }

    /// Conversion with the output placed in `dir` instead of the current
    /// directory.
    pub(crate) fn convert_in(&self, dir: &Path, stop: &dyn Stop) -> Result<Conversion, BmpError> {
        let data = self.read_input()?;
        let (headers, bytes) = convert_dyn(&data, self.limits, stop)?;
        // Input buffer is released before the output is opened.
        drop(data);

        let output = dir.join(OUTPUT_FILE_NAME);
        write_replacing(&output, &bytes)?;
        log::info!(
            "converted {} ({}x{}) to {}",
            self.input.display(),
            headers.width(),
            headers.height(),
            output.display()
        );
        Ok(Conversion { headers, output })
    }

    fn read_input(&self) -> Result<Vec<u8>, BmpError> {
        let data = fs::read(self.input).map_err(|source| BmpError::InputNotFound {
            path: self.input.to_path_buf(),
            source,
        })?;
        log::debug!("read {} bytes from {}", data.len(), self.input.display());
        Ok(data)
    }
}

/// Write `bytes` to a temp file next to `path`, then move it over `path`.
///
/// The temp file is deleted on drop if any step fails, so `path` is either the
/// previous file or the complete new one.
fn write_replacing(path: &Path, bytes: &[u8]) -> Result<(), BmpError> {
    let write_failed = |source: std::io::Error| BmpError::OutputWriteFailed {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    if path.exists() {
        log::warn!("overwriting existing {}", path.display());
    }

    let mut temp = NamedTempFile::new_in(dir).map_err(write_failed)?;
    temp.write_all(bytes).map_err(write_failed)?;
    temp.as_file().sync_all().map_err(write_failed)?;
    temp.persist(path).map_err(|e| write_failed(e.error))?;
    Ok(())
}

/// Convert `input` to grayscale and write [`OUTPUT_FILE_NAME`] in the
/// current directory.
pub fn convert_to_grayscale_bmp(input: impl AsRef<Path>) -> Result<Conversion, BmpError> {
    GrayscaleRequest::new(input.as_ref()).convert(Unstoppable)
}

/// Decode `input` and render it as ASCII art.
pub fn render_file_as_ascii(input: impl AsRef<Path>) -> Result<Vec<String>, BmpError> {
    GrayscaleRequest::new(input.as_ref()).render_ascii(Unstoppable)
}
