//! 错误定义 Error definitions

use thiserror::Error;

/// 结果类型 Result type
pub type R<T> = Result<T, E>;

/// 错误类型 Error type
///
/// Offsets count record-stream bytes from where this reader began; the
/// file-header preamble is not included (see `Reader::offset`).
#[derive(Error, Debug)]
pub enum E {
  #[error("io: {0}")]
  Io(#[from] std::io::Error),

  #[error("corrupt block at {offset}: {source}")]
  Layout { offset: u64, source: blob_layout::E },

  #[error("truncated at {offset}: want {want}, got {got}")]
  Truncated {
    offset: u64,
    want: usize,
    got: usize,
  },

  #[error("checksum mismatch at {offset}: expected {expected:#010x}, got {got:#010x}")]
  Checksum {
    offset: u64,
    expected: u32,
    got: u32,
  },

  #[error("header read at {offset}, records already consumed")]
  HeaderAfterRecords { offset: u64 },
}

impl E {
  /// Structurally bad bytes, as opposed to a device-level failure
  /// 字节结构损坏（相对设备级失败）
  #[inline]
  pub fn is_corruption(&self) -> bool {
    !matches!(self, Self::Io(_) | Self::HeaderAfterRecords { .. })
  }

  /// Short read of a required block 必需块的短读
  #[inline]
  pub fn is_truncation(&self) -> bool {
    matches!(self, Self::Truncated { .. })
  }
}
