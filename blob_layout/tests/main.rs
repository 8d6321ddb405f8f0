use aok::{OK, Void};
use blob_layout::{
  Compression, E, FLAG_TTL, FLAG_VALUE, FileHeader, HEADER_SIZE, MAGIC, RECORD_FOOTER_SIZE,
  RECORD_HEADER_SIZE, RecordFooter, RecordHead, VERSION, crc32, crc32_pair,
};
use log::info;

#[static_init::constructor(0)]
extern "C" fn _log_init() {
  log_init::init();
}

#[test]
fn file_header_round_trip() -> Void {
  let h = FileHeader::new(Compression::None);
  let mut buf = [0u8; HEADER_SIZE];
  h.write(&mut buf);

  let h2 = FileHeader::read(&buf)?;
  assert_eq!(h2, h);
  assert_eq!(h2.version, VERSION);

  // Re-encode is byte-identical 重编码字节一致
  let mut buf2 = [0u8; HEADER_SIZE];
  h2.write(&mut buf2);
  assert_eq!(buf, buf2);

  info!("file header round trip ok");
  OK
}

#[test]
fn file_header_rejects() {
  let h = FileHeader::new(Compression::Snappy);
  let mut buf = [0u8; HEADER_SIZE];
  h.write(&mut buf);

  // Short 截断
  assert!(matches!(
    FileHeader::read(&buf[..HEADER_SIZE - 1]),
    Err(E::Short { want, got }) if want == HEADER_SIZE && got == HEADER_SIZE - 1
  ));

  // Bad magic 坏魔数
  let mut bad = buf;
  bad[0] ^= 0xFF;
  assert!(matches!(FileHeader::read(&bad), Err(E::BadMagic(m)) if m != MAGIC));

  // Bad version 坏版本
  let mut bad = buf;
  bad[4] = 99;
  assert!(matches!(FileHeader::read(&bad), Err(E::BadVersion(99))));

  // Bad compression tag 坏压缩标记
  let mut bad = buf;
  bad[6] = 7;
  assert!(matches!(FileHeader::read(&bad), Err(E::BadCompression(7))));

  // Unknown flag bits 未知标志位
  let mut bad = buf;
  bad[7] = 0x80;
  assert!(matches!(FileHeader::read(&bad), Err(E::BadFlag(0x80))));
}

#[test]
fn record_head_round_trip() -> Void {
  let h = RecordHead::new(2, 5, FLAG_VALUE);
  assert_eq!(h.payload_span(), 7);
  assert_eq!(
    h.record_span(),
    (RECORD_HEADER_SIZE + 7 + RECORD_FOOTER_SIZE) as u64
  );

  let mut buf = [0u8; RECORD_HEADER_SIZE];
  h.write(&mut buf);
  let h2 = RecordHead::read(&buf)?;
  assert_eq!(h2, h);

  let ttl = RecordHead::new(10, 0, FLAG_TTL);
  let mut buf = [0u8; RECORD_HEADER_SIZE];
  ttl.write(&mut buf);
  assert_eq!(RecordHead::read(&buf)?.flags, FLAG_TTL);
  OK
}

#[test]
fn record_head_bounds() {
  // key_len over 64KB 超过 64KB 的 key
  let h = RecordHead::new(u16::MAX as u32 + 1, 0, FLAG_VALUE);
  let mut buf = [0u8; RECORD_HEADER_SIZE];
  h.write(&mut buf);
  assert!(matches!(RecordHead::read(&buf), Err(E::KeyTooLarge(_))));

  // blob_len over 4GB 超过 4GB 的 blob
  let h = RecordHead::new(1, u32::MAX as u64 + 1, FLAG_VALUE);
  let mut buf = [0u8; RECORD_HEADER_SIZE];
  h.write(&mut buf);
  assert!(matches!(RecordHead::read(&buf), Err(E::BlobTooLarge(_))));

  // Unknown record flag 未知记录标记
  let h = RecordHead::new(1, 1, 9);
  let mut buf = [0u8; RECORD_HEADER_SIZE];
  h.write(&mut buf);
  assert!(matches!(RecordHead::read(&buf), Err(E::BadFlag(9))));

  // Short 截断
  assert!(matches!(
    RecordHead::read(&buf[..3]),
    Err(E::Short { want, got }) if want == RECORD_HEADER_SIZE && got == 3
  ));
}

#[test]
fn record_footer_round_trip() -> Void {
  let f = RecordFooter::new(42, 0xDEAD_BEEF);
  let mut buf = [0u8; RECORD_FOOTER_SIZE];
  f.write(&mut buf);

  let f2 = RecordFooter::read(&buf)?;
  assert_eq!(f2.sequence, 42);
  assert_eq!(f2.crc, 0xDEAD_BEEF);

  assert!(matches!(
    RecordFooter::read(&buf[..5]),
    Err(E::Short { .. })
  ));
  OK
}

#[test]
fn crc_pair_matches_concat() {
  let key = b"k1";
  let blob = b"hello";
  let mut concat = Vec::new();
  concat.extend_from_slice(key);
  concat.extend_from_slice(blob);
  assert_eq!(crc32_pair(key, blob), crc32(&concat));
  assert_eq!(crc32_pair(b"", b""), crc32(b""));
}
