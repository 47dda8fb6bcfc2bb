use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use sha2::{Digest, Sha256};

pub const CHUNK_SIZE: usize = 64 * 1024;

/// Copies `reader` into `writer` one chunk at a time. Returns the number of bytes read.
pub fn pump<R, W>(reader: &mut R, writer: &mut W) -> io::Result<u64>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut buf = vec![0u8; CHUNK_SIZE];
    let mut total = 0u64;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        writer.write_all(&buf[..n])?;
        total += n as u64;
    }
    writer.flush()?;
    Ok(total)
}

pub fn sha256_hex<R: Read + ?Sized>(reader: &mut R) -> io::Result<String> {
    let mut hasher = Sha256::new();
    let mut buf = vec![0u8; CHUNK_SIZE];
    loop {
        match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => hasher.update(&buf[..n]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(format!("{:x}", hasher.finalize()))
}

/// A freshly created output file that is deleted again unless committed.
pub struct PendingFile {
    path: PathBuf,
    file: File,
    keep: bool,
}

impl PendingFile {
    /// Creates `path`, failing if anything already exists there.
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().write(true).create_new(true).open(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            file,
            keep: false,
        })
    }

    pub fn commit(mut self) -> io::Result<()> {
        self.file.flush()?;
        self.keep = true;
        Ok(())
    }
}

impl Write for PendingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

impl Drop for PendingFile {
    fn drop(&mut self) {
        if !self.keep {
            let _ = fs::remove_file(&self.path);
        }
    }
}

pub fn copy_to_new<R: Read + ?Sized>(reader: &mut R, dest: &Path) -> io::Result<u64> {
    let mut out = PendingFile::create(dest)?;
    let n = pump(reader, &mut out)?;
    out.commit()?;
    Ok(n)
}

pub fn gzip_to_new<R: Read + ?Sized>(reader: &mut R, dest: &Path) -> io::Result<u64> {
    let out = PendingFile::create(dest)?;
    let mut encoder = GzEncoder::new(out, Compression::default());
    let n = pump(reader, &mut encoder)?;
    encoder.finish()?.commit()?;
    Ok(n)
}

pub fn gunzip_to_new<R: Read>(reader: R, dest: &Path) -> io::Result<u64> {
    let mut out = PendingFile::create(dest)?;
    let mut decoder = GzDecoder::new(reader);
    let n = pump(&mut decoder, &mut out)?;
    out.commit()?;
    Ok(n)
}
