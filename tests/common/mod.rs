//! In-memory zip fixture builder.
//!
//! Builds small but genuine archives (real Local File Headers, Central
//! Directory, and CRCs) so walker tests exercise the actual parser rather
//! than canned byte dumps. Supports STORED and DEFLATE entries and an
//! optional archive comment.

use byteorder::{LittleEndian, WriteBytesExt};
use flate2::Compression;
use flate2::write::DeflateEncoder;
use std::io::Write;

pub struct ZipEntry<'a> {
    pub name: &'a str,
    pub data: &'a [u8],
    pub deflate: bool,
}

pub fn stored<'a>(name: &'a str, data: &'a [u8]) -> ZipEntry<'a> {
    ZipEntry {
        name,
        data,
        deflate: false,
    }
}

pub fn deflated<'a>(name: &'a str, data: &'a [u8]) -> ZipEntry<'a> {
    ZipEntry {
        name,
        data,
        deflate: true,
    }
}

pub fn build_zip(entries: &[ZipEntry]) -> Vec<u8> {
    build_zip_commented(entries, "")
}

pub fn build_zip_commented(entries: &[ZipEntry], comment: &str) -> Vec<u8> {
    let mut out: Vec<u8> = Vec::new();
    let mut central: Vec<u8> = Vec::new();

    for entry in entries {
        let mut crc = flate2::Crc::new();
        crc.update(entry.data);
        let crc = crc.sum();

        let (method, payload) = if entry.deflate {
            let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(entry.data).unwrap();
            (8u16, encoder.finish().unwrap())
        } else {
            (0u16, entry.data.to_vec())
        };

        let lfh_offset = out.len() as u32;

        // Local File Header
        out.extend_from_slice(b"PK\x03\x04");
        out.write_u16::<LittleEndian>(20).unwrap(); // version needed
        out.write_u16::<LittleEndian>(0).unwrap(); // flags
        out.write_u16::<LittleEndian>(method).unwrap();
        out.write_u16::<LittleEndian>(0).unwrap(); // mod time
        out.write_u16::<LittleEndian>(0).unwrap(); // mod date
        out.write_u32::<LittleEndian>(crc).unwrap();
        out.write_u32::<LittleEndian>(payload.len() as u32).unwrap();
        out.write_u32::<LittleEndian>(entry.data.len() as u32).unwrap();
        out.write_u16::<LittleEndian>(entry.name.len() as u16).unwrap();
        out.write_u16::<LittleEndian>(0).unwrap(); // extra field length
        out.extend_from_slice(entry.name.as_bytes());
        out.extend_from_slice(&payload);

        // Central Directory File Header
        central.extend_from_slice(b"PK\x01\x02");
        central.write_u16::<LittleEndian>(20).unwrap(); // version made by
        central.write_u16::<LittleEndian>(20).unwrap(); // version needed
        central.write_u16::<LittleEndian>(0).unwrap(); // flags
        central.write_u16::<LittleEndian>(method).unwrap();
        central.write_u16::<LittleEndian>(0).unwrap(); // mod time
        central.write_u16::<LittleEndian>(0).unwrap(); // mod date
        central.write_u32::<LittleEndian>(crc).unwrap();
        central.write_u32::<LittleEndian>(payload.len() as u32).unwrap();
        central.write_u32::<LittleEndian>(entry.data.len() as u32).unwrap();
        central.write_u16::<LittleEndian>(entry.name.len() as u16).unwrap();
        central.write_u16::<LittleEndian>(0).unwrap(); // extra field length
        central.write_u16::<LittleEndian>(0).unwrap(); // comment length
        central.write_u16::<LittleEndian>(0).unwrap(); // disk number start
        central.write_u16::<LittleEndian>(0).unwrap(); // internal attrs
        central.write_u32::<LittleEndian>(0).unwrap(); // external attrs
        central.write_u32::<LittleEndian>(lfh_offset).unwrap();
        central.extend_from_slice(entry.name.as_bytes());
    }

    let cd_offset = out.len() as u32;
    out.extend_from_slice(&central);
    let cd_size = out.len() as u32 - cd_offset;

    // End of Central Directory
    out.extend_from_slice(b"PK\x05\x06");
    out.write_u16::<LittleEndian>(0).unwrap(); // disk number
    out.write_u16::<LittleEndian>(0).unwrap(); // disk with CD
    out.write_u16::<LittleEndian>(entries.len() as u16).unwrap();
    out.write_u16::<LittleEndian>(entries.len() as u16).unwrap();
    out.write_u32::<LittleEndian>(cd_size).unwrap();
    out.write_u32::<LittleEndian>(cd_offset).unwrap();
    out.write_u16::<LittleEndian>(comment.len() as u16).unwrap();
    out.extend_from_slice(comment.as_bytes());

    out
}
