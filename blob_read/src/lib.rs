//! Sequential blob log reader 值日志顺序读取器
//!
//! Decodes one already-open blob log stream: file header first, then
//! records at a caller-chosen depth, tracking exact byte consumption so a
//! later reader can resume from the reported offset.
//! 解码一个已打开的值日志流：先文件头，再按调用方选择的深度读记录，
//! 精确跟踪字节消耗以便后续从报告的偏移恢复。

#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod file;
mod reader;
mod record;
mod recover;
mod report;

pub use error::{E, R};
pub use file::{FsFile, SequentialFile};
pub use reader::{Conf, ReadLevel, Reader};
pub use record::Record;
pub use recover::RecoveryMode;
pub use report::{LogReporter, NopReporter, Reporter};
