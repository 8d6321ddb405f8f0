//! 常量定义 Constants

/// File magic "BLOG" 文件魔数
pub const MAGIC: u32 = 0x474F_4C42;

/// Format version 格式版本
pub const VERSION: u16 = 1;

/// File header size 文件头大小
/// magic(4) + version(2) + compression(1) + flags(1)
pub const HEADER_SIZE: usize = 8;

/// Record header size 记录头大小
/// key_len(4) + blob_len(8) + flags(1) + compression(1) + reserved(2)
pub const RECORD_HEADER_SIZE: usize = 16;

/// Record footer size 记录尾大小
/// sequence(8) + crc32(4)
pub const RECORD_FOOTER_SIZE: usize = 12;

/// Max key size (64KB) 最大 key 大小
pub const MAX_KEY_SIZE: u64 = u16::MAX as u64;

/// Max blob size (4GB) 最大 blob 大小
pub const MAX_BLOB_SIZE: u64 = u32::MAX as u64;

/// Record flag: normal value 记录标记：正常值
pub const FLAG_VALUE: u8 = 0;

/// Record flag: value with TTL 记录标记：带 TTL 的值
pub const FLAG_TTL: u8 = 1;
