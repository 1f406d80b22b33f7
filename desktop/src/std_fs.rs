use std::{fs, io::BufWriter, path::Path};

use embedded_io::ErrorType;
use log::info;

/// Buffered output file exposed through `embedded_io::Write`.
pub struct StdFileWriter {
    file: BufWriter<fs::File>,
}

impl StdFileWriter {
    /// Creates the file, truncating an existing one.
    pub fn create(path: &Path) -> std::io::Result<Self> {
        info!("Writing {}", path.display());
        let file = fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        Ok(StdFileWriter {
            file: BufWriter::new(file),
        })
    }
}

impl ErrorType for StdFileWriter {
    type Error = std::io::Error;
}

impl embedded_io::Write for StdFileWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        use std::io::Write;
        self.file.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        use std::io::Write;
        self.file.flush()
    }
}
