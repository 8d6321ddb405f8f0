//! Record head/footer codec 记录头尾编解码

use bytes::{Buf, BufMut};

use crate::{
  consts::{
    FLAG_TTL, FLAG_VALUE, MAX_BLOB_SIZE, MAX_KEY_SIZE, RECORD_FOOTER_SIZE, RECORD_HEADER_SIZE,
  },
  error::{E, R},
  file_header::Compression,
};

/// Record head (16 bytes) 记录头（16 字节）
///
/// | Field       | Size | Description          |
/// |-------------|------|----------------------|
/// | key_len     | 4    | Key length           |
/// | blob_len    | 8    | Blob length          |
/// | flags       | 1    | VALUE / TTL          |
/// | compression | 1    | Per-record override  |
/// | _reserved   | 2    | Zero                 |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordHead {
  pub key_len: u32,
  pub blob_len: u64,
  pub flags: u8,
  pub compression: Compression,
}

impl RecordHead {
  /// Create head 创建记录头
  #[inline]
  pub fn new(key_len: u32, blob_len: u64, flags: u8) -> Self {
    Self {
      key_len,
      blob_len,
      flags,
      compression: Compression::None,
    }
  }

  /// key + blob bytes on disk 磁盘上 key + blob 字节数
  #[inline]
  pub fn payload_span(&self) -> u64 {
    self.key_len as u64 + self.blob_len
  }

  /// Total on-disk span of the record 记录磁盘总跨度
  #[inline]
  pub fn record_span(&self) -> u64 {
    RECORD_HEADER_SIZE as u64 + self.payload_span() + RECORD_FOOTER_SIZE as u64
  }

  /// Read from bytes 从字节读取
  pub fn read(mut buf: &[u8]) -> R<Self> {
    if buf.len() < RECORD_HEADER_SIZE {
      return Err(E::Short {
        want: RECORD_HEADER_SIZE,
        got: buf.len(),
      });
    }
    let key_len = buf.get_u32_le();
    let blob_len = buf.get_u64_le();
    let flags = buf.get_u8();
    let compression = Compression::from_u8(buf.get_u8())?;
    if key_len as u64 > MAX_KEY_SIZE {
      return Err(E::KeyTooLarge(key_len as u64));
    }
    if blob_len > MAX_BLOB_SIZE {
      return Err(E::BlobTooLarge(blob_len));
    }
    if flags != FLAG_VALUE && flags != FLAG_TTL {
      return Err(E::BadFlag(flags));
    }
    Ok(Self {
      key_len,
      blob_len,
      flags,
      compression,
    })
  }

  /// Write to bytes 写入字节
  #[inline]
  pub fn write(&self, mut buf: &mut [u8]) {
    debug_assert!(buf.len() >= RECORD_HEADER_SIZE);
    buf.put_u32_le(self.key_len);
    buf.put_u64_le(self.blob_len);
    buf.put_u8(self.flags);
    buf.put_u8(self.compression as u8);
    buf.put_u16_le(0);
  }
}

/// Record footer (12 bytes) 记录尾（12 字节）
///
/// | Field    | Size | Description              |
/// |----------|------|--------------------------|
/// | sequence | 8    | Sequence number          |
/// | crc      | 4    | CRC32 over key then blob |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordFooter {
  pub sequence: u64,
  pub crc: u32,
}

impl RecordFooter {
  /// Create footer 创建记录尾
  #[inline]
  pub fn new(sequence: u64, crc: u32) -> Self {
    Self { sequence, crc }
  }

  /// Read from bytes 从字节读取
  #[inline]
  pub fn read(mut buf: &[u8]) -> R<Self> {
    if buf.len() < RECORD_FOOTER_SIZE {
      return Err(E::Short {
        want: RECORD_FOOTER_SIZE,
        got: buf.len(),
      });
    }
    Ok(Self {
      sequence: buf.get_u64_le(),
      crc: buf.get_u32_le(),
    })
  }

  /// Write to bytes 写入字节
  #[inline]
  pub fn write(&self, mut buf: &mut [u8]) {
    debug_assert!(buf.len() >= RECORD_FOOTER_SIZE);
    buf.put_u64_le(self.sequence);
    buf.put_u32_le(self.crc);
  }
}
