//! Record buffers 记录缓冲区

use blob_layout::RecordHead;

/// One decoded record 一条解码后的记录
///
/// Key/blob buffers are owned by the record and grown on demand; reusing
/// one `Record` across `read_record` calls keeps their capacity and avoids
/// reallocation. At partial read depths the unread buffers stay empty.
/// key/blob 缓冲区归记录所有，按需增长；跨调用复用同一 `Record`
/// 保留容量避免重新分配。部分深度下未读的缓冲区为空。
#[derive(Debug, Default)]
pub struct Record {
  pub head: RecordHead,
  pub sequence: u64,
  pub key: Vec<u8>,
  pub blob: Vec<u8>,
}

impl Record {
  /// Empty without freeing capacity 清空但保留容量
  #[inline]
  pub fn clear(&mut self) {
    self.head = RecordHead::default();
    self.sequence = 0;
    self.key.clear();
    self.blob.clear();
  }
}
