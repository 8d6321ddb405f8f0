//! Recovery policy 恢复策略
//!
//! A pure policy value: the decoder never branches on it. It governs how
//! the caller-visible boundary interprets truncation/corruption signals
//! near end of stream.
//! 纯策略值：解码器不依据它分支。它决定调用方边界如何解释流尾的
//! 截断/损坏信号。

use crate::error::E;

/// How truncated/corrupted trailing records are handled
/// 如何处理截断/损坏的尾部记录
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RecoveryMode {
  /// Any structural damage is a hard error 任何结构损坏都是硬错误
  AbsoluteConsistency,
  /// A short final record is a clean end of log 短尾记录视为正常结束
  #[default]
  TolerateCorruptedTailRecords,
  /// Stop at the first damage, keep everything before it
  /// 在首个损坏处停止，保留其前所有记录
  PointInTimeRecovery,
  /// Drop any corrupt record and scan on where the stream position
  /// allows (a checksum failure is consumed in full); structural damage
  /// leaves no resync point and stops the scan
  /// 丢弃任何损坏记录并在可行时继续（校验失败已整条消耗）；
  /// 结构损坏无重同步点则停止
  SkipAnyCorruptedRecords,
}

impl RecoveryMode {
  /// Whether `err` at the stream tail ends the log cleanly
  /// 流尾的 `err` 是否视为日志正常结束
  pub fn tolerates_tail(&self, err: &E) -> bool {
    match self {
      Self::AbsoluteConsistency => false,
      Self::TolerateCorruptedTailRecords | Self::PointInTimeRecovery => err.is_truncation(),
      Self::SkipAnyCorruptedRecords => err.is_corruption(),
    }
  }
}
