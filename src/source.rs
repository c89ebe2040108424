//!
//! Random access byte sources that the decoder reads from.
//!

use std::fs::File;
use std::io;
use std::path::Path;

///
/// An addressable, read-only store of bytes.
///
/// Every read is made by absolute offset; the decoder never assumes sequential access and never caches.  Implementations should report a read that runs past the end of the available data with [`io::ErrorKind::UnexpectedEof`] so the decoder can tell truncated input apart from storage failures.
///
/// Reads take `&self`, so a source that is `Sync` can back several decodes running on different threads at once.
///
pub trait ByteSource {
    ///
    /// Fills `buf` with the bytes starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns an error of kind [`io::ErrorKind::UnexpectedEof`] if fewer than `buf.len()` bytes are available at `offset`, or any other error produced by the underlying storage.
    ///
    fn read_at(&self, offset: u64, buf: &mut [u8]) -> io::Result<()>;

    ///
    /// Reads `length` bytes at `offset` into a new vector.
    ///
    fn read_bytes(&self, offset: u64, length: usize) -> io::Result<Vec<u8>> {
        let mut buf = vec![0; length];
        self.read_at(offset, &mut buf)?;
        Ok(buf)
    }
}

fn end_of_data(offset: u64, length: usize) -> io::Error {
    io::Error::new(io::ErrorKind::UnexpectedEof, format!("cannot read {} bytes at offset {}", length, offset))
}

impl ByteSource for [u8] {
    fn read_at(&self, offset: u64, buf: &mut [u8]) -> io::Result<()> {
        let start = usize::try_from(offset).map_err(|_| end_of_data(offset, buf.len()))?;
        let data = start.checked_add(buf.len())
            .and_then(|end| self.get(start..end))
            .ok_or_else(|| end_of_data(offset, buf.len()))?;
        buf.copy_from_slice(data);
        Ok(())
    }
}

impl ByteSource for Vec<u8> {
    fn read_at(&self, offset: u64, buf: &mut [u8]) -> io::Result<()> {
        self.as_slice().read_at(offset, buf)
    }
}

impl<T: ByteSource + ?Sized> ByteSource for &T {
    fn read_at(&self, offset: u64, buf: &mut [u8]) -> io::Result<()> {
        (**self).read_at(offset, buf)
    }
}

///
/// A [`ByteSource`] backed by a file on disk, read with positioned reads.
///
/// The file's length is captured when the source is created.
///
#[derive(Debug)]
pub struct FileSource {
    file: File,
    len: u64,
}

impl FileSource {
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        FileSource::new(File::open(path)?)
    }

    pub fn new(file: File) -> io::Result<Self> {
        let len = file.metadata()?.len();
        Ok(FileSource { file, len })
    }

    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn into_inner(self) -> File {
        self.file
    }
}

impl ByteSource for FileSource {
    #[cfg(unix)]
    fn read_at(&self, offset: u64, buf: &mut [u8]) -> io::Result<()> {
        use std::os::unix::fs::FileExt;
        self.file.read_exact_at(buf, offset)
    }

    #[cfg(windows)]
    fn read_at(&self, offset: u64, buf: &mut [u8]) -> io::Result<()> {
        use std::os::windows::fs::FileExt;
        let mut filled = 0;
        while filled < buf.len() {
            let position = offset.checked_add(filled as u64).ok_or_else(|| end_of_data(offset, buf.len()))?;
            match self.file.seek_read(&mut buf[filled..], position) {
                Ok(0) => return Err(end_of_data(offset, buf.len())),
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {},
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    #[cfg(not(any(unix, windows)))]
    fn read_at(&self, offset: u64, buf: &mut [u8]) -> io::Result<()> {
        use std::io::{Read, Seek, SeekFrom};
        let mut file = &self.file;
        file.seek(SeekFrom::Start(offset))?;
        file.read_exact(buf)
    }
}
