//! Corruption reporter 损坏报告

/// Corruption-notification capability 损坏通知能力
///
/// Invoked by the policy boundary when a decode error is judged non-fatal
/// and the stream position is advanced past the bad region. Decouples the
/// core's error signals from logging/metrics policy.
pub trait Reporter {
  /// `bytes` were dropped for `reason` 因 `reason` 丢弃了 `bytes` 字节
  fn corruption(&mut self, bytes: u64, reason: &str);
}

/// Default: do nothing 默认：什么都不做
#[derive(Debug, Default, Clone, Copy)]
pub struct NopReporter;

impl Reporter for NopReporter {
  #[inline]
  fn corruption(&mut self, _bytes: u64, _reason: &str) {}
}

/// Report via the `log` facade 通过 `log` 门面报告
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter {
  /// Log number for context 日志编号用于上下文
  pub log_number: u64,
}

impl Reporter for LogReporter {
  fn corruption(&mut self, bytes: u64, reason: &str) {
    log::warn!("blob log {}: dropped {} bytes: {}", self.log_number, bytes, reason);
  }
}
