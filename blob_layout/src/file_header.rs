//! File header codec 文件头编解码
//! Zero-copy via bytes 通过 bytes 实现零拷贝

use bytes::{Buf, BufMut};

use crate::{
  consts::{HEADER_SIZE, MAGIC, VERSION},
  error::{E, R},
};

/// Codec-wide compression tag 编解码器级压缩标记
///
/// Payload decompression is the blob store's business; the reader only
/// carries the tag through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum Compression {
  #[default]
  None = 0,
  Snappy = 1,
}

impl Compression {
  /// 从标记字节解析 Parse from tag byte
  #[inline]
  pub fn from_u8(tag: u8) -> R<Self> {
    match tag {
      0 => Ok(Self::None),
      1 => Ok(Self::Snappy),
      _ => Err(E::BadCompression(tag)),
    }
  }
}

/// File header (8 bytes) 文件头（8 字节）
///
/// | Field       | Size | Description               |
/// |-------------|------|---------------------------|
/// | magic       | 4    | "BLOG"                    |
/// | version     | 2    | Format version            |
/// | compression | 1    | Default compression       |
/// | flags       | 1    | File flags (none defined) |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileHeader {
  pub version: u16,
  pub compression: Compression,
  pub flags: u8,
}

impl FileHeader {
  /// Create v1 header 创建 v1 文件头
  #[inline]
  pub fn new(compression: Compression) -> Self {
    Self {
      version: VERSION,
      compression,
      flags: 0,
    }
  }

  /// Read from bytes 从字节读取
  #[inline]
  pub fn read(mut buf: &[u8]) -> R<Self> {
    if buf.len() < HEADER_SIZE {
      return Err(E::Short {
        want: HEADER_SIZE,
        got: buf.len(),
      });
    }
    let magic = buf.get_u32_le();
    if magic != MAGIC {
      return Err(E::BadMagic(magic));
    }
    let version = buf.get_u16_le();
    if version != VERSION {
      return Err(E::BadVersion(version));
    }
    let compression = Compression::from_u8(buf.get_u8())?;
    let flags = buf.get_u8();
    if flags != 0 {
      return Err(E::BadFlag(flags));
    }
    Ok(Self {
      version,
      compression,
      flags,
    })
  }

  /// Write to bytes 写入字节
  #[inline]
  pub fn write(&self, mut buf: &mut [u8]) {
    debug_assert!(buf.len() >= HEADER_SIZE);
    buf.put_u32_le(MAGIC);
    buf.put_u16_le(self.version);
    buf.put_u8(self.compression as u8);
    buf.put_u8(self.flags);
  }
}
