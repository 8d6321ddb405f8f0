//! Blob log on-disk layout 值日志磁盘布局
//!
//! ## File Layout
//! ```text
//! | FileHeader(8) | Record 0 | Record 1 | ... |
//! ```
//!
//! ## Record Layout
//! ```text
//! | RecordHead(16) | key | blob | RecordFooter(12) |
//! ```
//!
//! All integers little-endian 所有整数小端

#![cfg_attr(docsrs, feature(doc_cfg))]

mod consts;
mod crc;
mod error;
mod file_header;
mod record;

pub use consts::{
  FLAG_TTL, FLAG_VALUE, HEADER_SIZE, MAGIC, MAX_BLOB_SIZE, MAX_KEY_SIZE, RECORD_FOOTER_SIZE,
  RECORD_HEADER_SIZE, VERSION,
};
pub use crc::{crc32, crc32_pair};
pub use error::{E, R};
pub use file_header::{Compression, FileHeader};
pub use record::{RecordFooter, RecordHead};
