//! Sequential byte-file collaborator 顺序字节文件协作者

use std::{
  fs,
  io::{self, Read, Seek, SeekFrom},
  path::Path,
};

/// Synchronous forward-only byte stream 同步只进字节流
///
/// `read` fills caller-owned scratch and returns fewer than `n` bytes only
/// at end of stream. `skip` advances without copying; a discarded-read
/// fallback is a legal implementation.
pub trait SequentialFile {
  /// Read up to `n` bytes into `scratch`, returning the count read
  /// 读取最多 `n` 字节到 `scratch`，返回读到的字节数
  fn read(&mut self, n: usize, scratch: &mut Vec<u8>) -> io::Result<usize>;

  /// Advance the stream position by `n` bytes 前移 `n` 字节
  fn skip(&mut self, n: u64) -> io::Result<()>;
}

/// `std::fs` backed sequential file 基于 `std::fs` 的顺序文件
pub struct FsFile {
  file: fs::File,
}

impl FsFile {
  /// Open for sequential reading 打开顺序读取
  pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
    Ok(Self {
      file: fs::File::open(path)?,
    })
  }
}

impl From<fs::File> for FsFile {
  #[inline]
  fn from(file: fs::File) -> Self {
    Self { file }
  }
}

impl SequentialFile for FsFile {
  fn read(&mut self, n: usize, scratch: &mut Vec<u8>) -> io::Result<usize> {
    scratch.clear();
    scratch.resize(n, 0);
    let mut got = 0;
    while got < n {
      match self.file.read(&mut scratch[got..]) {
        Ok(0) => break,
        Ok(r) => got += r,
        Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
        Err(e) => return Err(e),
      }
    }
    scratch.truncate(got);
    Ok(got)
  }

  fn skip(&mut self, n: u64) -> io::Result<()> {
    let n = i64::try_from(n).map_err(|_| io::Error::from(io::ErrorKind::InvalidInput))?;
    self.file.seek(SeekFrom::Current(n))?;
    Ok(())
  }
}

/// In-memory stream, used by tests and resumed in-buffer scans
/// 内存流，用于测试和缓冲内恢复扫描
impl SequentialFile for &[u8] {
  fn read(&mut self, n: usize, scratch: &mut Vec<u8>) -> io::Result<usize> {
    let s = *self;
    let take = n.min(s.len());
    scratch.clear();
    scratch.extend_from_slice(&s[..take]);
    *self = &s[take..];
    Ok(take)
  }

  fn skip(&mut self, n: u64) -> io::Result<()> {
    // Skip past end leaves the stream at end; the next read reports it
    // 跳过末尾则停在末尾，下次读取报告
    let s = *self;
    let take = usize::try_from(n).unwrap_or(usize::MAX).min(s.len());
    *self = &s[take..];
    Ok(())
  }
}
