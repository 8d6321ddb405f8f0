//! Sequential cursor 顺序游标

use blob_layout::{
  FileHeader, HEADER_SIZE, RECORD_FOOTER_SIZE, RECORD_HEADER_SIZE, RecordFooter, RecordHead,
  crc32_pair,
};

use crate::{
  error::{E, R},
  file::SequentialFile,
  record::Record,
  recover::RecoveryMode,
  report::{NopReporter, Reporter},
};

/// How much of a record one read call materializes
/// 一次读取调用物化记录的多少
///
/// The cursor advances by the record's full on-disk span at every level;
/// unread payload is skipped, not read.
/// 任何深度下游标都前进记录的完整磁盘跨度；未读载荷跳过而非读取。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadLevel {
  /// Head + footer only: sequence number, no payload
  /// 仅头尾：序列号，无载荷
  HdrFooter,
  /// Head + footer + key 头尾加 key
  HdrFooterKey,
  /// Head + footer + key + blob 头尾加 key 和 blob
  HdrFooterKeyBlob,
}

/// Reader configuration 读取器配置
#[derive(Debug, Clone, Copy)]
pub struct Conf {
  /// Log file number, for diagnostics only 日志文件编号，仅用于诊断
  pub log_number: u64,
  /// Byte offset this reader resumes from 此读取器恢复起始的字节偏移
  pub initial_offset: u64,
  /// Verify the footer CRC when the payload was fully materialized
  /// 载荷完整物化时校验尾部 CRC
  pub verify_checksum: bool,
}

impl Default for Conf {
  fn default() -> Self {
    Self {
      log_number: 0,
      initial_offset: 0,
      verify_checksum: true,
    }
  }
}

/// Sequential blob log reader 顺序值日志读取器
///
/// Never seeks backward: reads forward and skips what it will not
/// materialize. The scratch buffer is overwritten on every call. Not for
/// concurrent use from multiple threads; independent readers over
/// independent files are fine.
/// 从不回退：只前进读取并跳过不物化的部分。scratch 每次调用被覆盖。
/// 不可多线程并发使用；独立文件上的独立读取器没问题。
pub struct Reader<F> {
  file: F,
  conf: Conf,
  reporter: Box<dyn Reporter>,
  scratch: Vec<u8>,
  next_byte: u64,
}

impl<F: SequentialFile> Reader<F> {
  /// Create with the no-op reporter 以空报告器创建
  pub fn new(file: F, conf: Conf) -> Self {
    Self::with_reporter(file, conf, Box::new(NopReporter))
  }

  /// Create with a corruption reporter 以损坏报告器创建
  pub fn with_reporter(file: F, conf: Conf, reporter: Box<dyn Reporter>) -> Self {
    Self {
      file,
      conf,
      reporter,
      scratch: Vec::with_capacity(RECORD_HEADER_SIZE),
      next_byte: 0,
    }
  }

  /// Log file number 日志文件编号
  #[inline]
  pub fn log_number(&self) -> u64 {
    self.conf.log_number
  }

  /// Current record-stream offset: `initial_offset` plus record bytes
  /// consumed since construction. The file-header preamble is not counted.
  /// 当前记录流偏移：`initial_offset` 加构造以来消耗的记录字节。
  /// 文件头前导不计入。
  #[inline]
  pub fn offset(&self) -> u64 {
    self.conf.initial_offset + self.next_byte
  }

  /// Decode the one-time file preamble 解码一次性文件前导
  ///
  /// Legal only before any record read. Advances the file position by
  /// `HEADER_SIZE` but not the record-stream offset.
  /// 仅在读任何记录之前合法。文件位置前进 `HEADER_SIZE`，
  /// 记录流偏移不变。
  pub fn read_header(&mut self) -> R<FileHeader> {
    if self.next_byte != 0 {
      return Err(E::HeaderAfterRecords {
        offset: self.offset(),
      });
    }
    let got = self.file.read(HEADER_SIZE, &mut self.scratch)?;
    if got < HEADER_SIZE {
      return Err(E::Truncated {
        offset: self.conf.initial_offset + got as u64,
        want: HEADER_SIZE,
        got,
      });
    }
    FileHeader::read(&self.scratch).map_err(|source| E::Layout {
      offset: self.conf.initial_offset,
      source,
    })
  }

  /// Decode one record at `level` 按 `level` 解码一条记录
  ///
  /// `Ok(true)`: one record decoded into `rec`, cursor past it.
  /// `Ok(false)`: clean end of log, or a tail signal `mode` tolerates
  /// (the reporter sees the dropped span).
  /// `Err`: I/O failure or corruption `mode` does not tolerate; the reader
  /// is unusable for further sequential reads.
  ///
  /// Decoding itself is identical for every `mode`; the mode only governs
  /// how truncation/corruption signals are interpreted here at the
  /// boundary.
  /// 解码本身与 `mode` 无关；mode 只决定边界处如何解释截断/损坏信号。
  pub fn read_record(&mut self, rec: &mut Record, level: ReadLevel, mode: RecoveryMode) -> R<bool> {
    loop {
      let before = self.next_byte;
      match self.decode_record(rec, level) {
        Err(e) if e.is_corruption() && mode.tolerates_tail(&e) => {
          self.reporter.corruption(self.next_byte - before, &e.to_string());
          // A checksum failure was consumed in full, the cursor already
          // sits at the next record
          // 校验失败的记录已整条消耗，游标已在下一条
          if matches!(mode, RecoveryMode::SkipAnyCorruptedRecords)
            && matches!(e, E::Checksum { .. })
          {
            continue;
          }
          return Ok(false);
        }
        other => return other,
      }
    }
  }

  /// Deterministic decode of one record, no recovery policy
  /// 一条记录的确定性解码，无恢复策略
  fn decode_record(&mut self, rec: &mut Record, level: ReadLevel) -> R<bool> {
    rec.clear();
    self.scratch.clear();
    let pos = self.offset();

    let got = self.file.read(RECORD_HEADER_SIZE, &mut self.scratch)?;
    if got == 0 {
      // Clean end of log 日志正常结束
      return Ok(false);
    }
    self.next_byte += RECORD_HEADER_SIZE as u64;
    if got < RECORD_HEADER_SIZE {
      return Err(E::Truncated {
        offset: pos + got as u64,
        want: RECORD_HEADER_SIZE,
        got,
      });
    }
    let head =
      RecordHead::read(&self.scratch).map_err(|source| E::Layout { offset: pos, source })?;
    rec.head = head;

    let key_len = head.key_len as usize;
    let blob_len = head.blob_len as usize;
    let payload = pos + RECORD_HEADER_SIZE as u64;

    match level {
      ReadLevel::HdrFooter => {
        self.file.skip(head.payload_span())?;
      }
      ReadLevel::HdrFooterKey => {
        let got = self.file.read(key_len, &mut rec.key)?;
        if got < key_len {
          return Err(E::Truncated {
            offset: payload + got as u64,
            want: key_len,
            got,
          });
        }
        self.file.skip(head.blob_len)?;
      }
      ReadLevel::HdrFooterKeyBlob => {
        let got = self.file.read(key_len, &mut rec.key)?;
        if got < key_len {
          return Err(E::Truncated {
            offset: payload + got as u64,
            want: key_len,
            got,
          });
        }
        let got = self.file.read(blob_len, &mut rec.blob)?;
        if got < blob_len {
          return Err(E::Truncated {
            offset: payload + key_len as u64 + got as u64,
            want: blob_len,
            got,
          });
        }
      }
    }

    let footer_pos = payload + head.payload_span();
    let got = self.file.read(RECORD_FOOTER_SIZE, &mut self.scratch)?;
    if got < RECORD_FOOTER_SIZE {
      return Err(E::Truncated {
        offset: footer_pos + got as u64,
        want: RECORD_FOOTER_SIZE,
        got,
      });
    }
    let footer = RecordFooter::read(&self.scratch).map_err(|source| E::Layout {
      offset: footer_pos,
      source,
    })?;
    rec.sequence = footer.sequence;

    // Depth-independent advance: the full on-disk span
    // 与深度无关的前进：完整磁盘跨度
    self.next_byte += head.payload_span() + RECORD_FOOTER_SIZE as u64;

    if self.conf.verify_checksum && matches!(level, ReadLevel::HdrFooterKeyBlob) {
      let crc = crc32_pair(&rec.key, &rec.blob);
      if crc != footer.crc {
        return Err(E::Checksum {
          offset: payload,
          expected: footer.crc,
          got: crc,
        });
      }
    }

    Ok(true)
  }
}
