//! builders of hand crafted events for tests
use super::constants::DEFAULT_COMMON_HEADER_LENGTH;
use super::fde::{FormatDescriptionPostHeader, SERVER_VERSION_LENGTH};
use super::util::checksum_crc32;

pub(crate) const SERVER_ID: u32 = 1;
pub(crate) const TIMESTAMP: u32 = 1705314600;

pub(crate) fn header_bytes(
    timestamp: u32,
    type_code: u8,
    server_id: u32,
    event_size: u32,
    next_position: u32,
    flags: u16,
) -> Vec<u8> {
    let mut bs = Vec::with_capacity(DEFAULT_COMMON_HEADER_LENGTH);
    bs.extend_from_slice(&timestamp.to_le_bytes());
    bs.push(type_code);
    bs.extend_from_slice(&server_id.to_le_bytes());
    bs.extend_from_slice(&event_size.to_le_bytes());
    bs.extend_from_slice(&next_position.to_le_bytes());
    bs.extend_from_slice(&flags.to_le_bytes());
    bs
}

/// post header lengths as written by mysql 8.0, resized to n entries
pub(crate) fn post_header_lengths(n: usize) -> Vec<u8> {
    let fde = FormatDescriptionPostHeader::size_in_bytes(n) as u8;
    let mut lens = vec![
        56, 13, 0, 8, 0, 18, 0, 4, 4, 4, 4, 18, 0, 0, fde, 0, 4, 26, 8, 0, 0, 0, 8, 8, 8, 2, 0, 0,
        0, 10, 10, 10, 42, 42, 0, 18, 52, 0, 0, 40, 0,
    ];
    lens.resize(n, 0);
    lens
}

pub(crate) fn fde_post_header_bytes(server_version: &str, n: usize) -> Vec<u8> {
    fde_post_header_bytes_with_lengths(server_version, &post_header_lengths(n))
}

pub(crate) fn fde_post_header_bytes_with_lengths(server_version: &str, lens: &[u8]) -> Vec<u8> {
    let mut bs = Vec::with_capacity(FormatDescriptionPostHeader::size_in_bytes(lens.len()));
    bs.extend_from_slice(&4u16.to_le_bytes());
    let mut version = server_version.as_bytes().to_vec();
    version.resize(SERVER_VERSION_LENGTH, 0);
    bs.extend_from_slice(&version);
    bs.extend_from_slice(&TIMESTAMP.to_le_bytes());
    bs.push(DEFAULT_COMMON_HEADER_LENGTH as u8);
    bs.extend_from_slice(lens);
    bs
}

/// full event of given type wrapping data after common header
///
/// if with_crc is set, the crc32 of the whole event is appended
/// and accounted in event size.
pub(crate) fn event_bytes(type_code: u8, data: &[u8], with_crc: bool) -> Vec<u8> {
    let crc_len = if with_crc { 4 } else { 0 };
    let event_size = (DEFAULT_COMMON_HEADER_LENGTH + data.len() + crc_len) as u32;
    let mut bs = header_bytes(TIMESTAMP, type_code, SERVER_ID, event_size, 0, 0);
    bs.extend_from_slice(data);
    if with_crc {
        let crc = checksum_crc32(&bs);
        bs.extend_from_slice(&crc.to_le_bytes());
    }
    bs
}

/// format description event, checksum algorithm byte is written if given
///
/// the 4-byte trailer always follows the algorithm byte, as mysql
/// computes it whatever the algorithm is
pub(crate) fn fde_event_bytes(n: usize, checksum_algorithm: Option<u8>) -> Vec<u8> {
    fde_event_bytes_with_lengths(&post_header_lengths(n), checksum_algorithm)
}

pub(crate) fn fde_event_bytes_with_lengths(lens: &[u8], checksum_algorithm: Option<u8>) -> Vec<u8> {
    let mut data = fde_post_header_bytes_with_lengths("8.0.36", lens);
    if let Some(alg) = checksum_algorithm {
        data.push(alg);
    }
    event_bytes(15, &data, checksum_algorithm.is_some())
}

pub(crate) fn rotate_event_bytes(position: u64, binlog: &str, with_crc: bool) -> Vec<u8> {
    let mut data = position.to_le_bytes().to_vec();
    data.extend_from_slice(binlog.as_bytes());
    event_bytes(4, &data, with_crc)
}
