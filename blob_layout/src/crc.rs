//! CRC32 校验 CRC32 checksum

/// 计算 CRC32 Compute CRC32
#[inline(always)]
pub fn crc32(data: &[u8]) -> u32 {
  crc32fast::hash(data)
}

/// CRC32 over key then blob 按 key、blob 顺序计算 CRC32
#[inline]
pub fn crc32_pair(key: &[u8], blob: &[u8]) -> u32 {
  let mut h = crc32fast::Hasher::new();
  h.update(key);
  h.update(blob);
  h.finalize()
}
