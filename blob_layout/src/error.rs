//! 错误定义 Error definitions

use thiserror::Error;

/// 结果类型 Result type
pub type R<T> = Result<T, E>;

/// 错误类型 Error type
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum E {
  #[error("short block: want {want}, got {got}")]
  Short { want: usize, got: usize },

  #[error("bad magic: {0:#010x}")]
  BadMagic(u32),

  #[error("bad version: {0}")]
  BadVersion(u16),

  #[error("bad compression tag: {0}")]
  BadCompression(u8),

  #[error("bad record flag: {0}")]
  BadFlag(u8),

  #[error("key too large: {0}")]
  KeyTooLarge(u64),

  #[error("blob too large: {0}")]
  BlobTooLarge(u64),
}
