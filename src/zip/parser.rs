//! In-memory ZIP archive reader.
//!
//! ZIP files are designed to be read from the end:
//! 1. Find the End of Central Directory (EOCD) at the buffer's tail
//! 2. Read the Central Directory to get metadata for all entries
//! 3. For extraction, read each entry's Local File Header and data
//!
//! Nested archives arrive as plain `Vec<u8>` entry contents, so the same
//! parser serves every recursion level of the walker.

use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{Cursor, Read};

use anyhow::{Context, Result, bail};
use flate2::read::DeflateDecoder;

use super::structures::*;

/// Maximum ZIP comment size allowed by the format (65535 bytes).
///
/// This limits the search area when looking for EOCD with a comment.
const MAX_COMMENT_SIZE: usize = 65535;

/// A parsed zip archive over a borrowed byte buffer.
///
/// Parsing reads only the Central Directory; entry data is decoded on
/// demand through [`Archive::read`].
#[derive(Debug)]
pub struct Archive<'a> {
    data: &'a [u8],
    entries: Vec<EntryRecord>,
}

impl<'a> Archive<'a> {
    /// Parse the archive's Central Directory.
    ///
    /// # Errors
    ///
    /// Returns an error if `data` is not a valid zip archive (no EOCD,
    /// truncated Central Directory, or a malformed file header).
    pub fn parse(data: &'a [u8]) -> Result<Self> {
        let (eocd, _) = find_eocd(data)?;

        let cd_start = eocd.cd_offset as usize;
        let cd_end = cd_start + eocd.cd_size as usize;
        if cd_end > data.len() {
            bail!("Not a valid ZIP file");
        }

        let mut cursor = Cursor::new(&data[cd_start..cd_end]);
        let mut entries = Vec::with_capacity(eocd.total_entries as usize);
        for _ in 0..eocd.total_entries {
            entries.push(parse_cdfh(&mut cursor)?);
        }

        Ok(Self { data, entries })
    }

    /// Entry metadata in Central Directory enumeration order.
    pub fn entries(&self) -> &[EntryRecord] {
        &self.entries
    }

    /// Decode one entry's bytes, verifying its CRC-32.
    ///
    /// # Errors
    ///
    /// Returns an error for an unsupported compression method, a
    /// truncated or malformed Local File Header, or a CRC mismatch.
    pub fn read(&self, entry: &EntryRecord) -> Result<Vec<u8>> {
        let data_offset = self.data_offset(entry)?;
        let data_end = data_offset + entry.compressed_size as usize;
        if data_end > self.data.len() {
            bail!("Entry data out of bounds: {}", entry.name);
        }
        let raw = &self.data[data_offset..data_end];

        let decoded = match entry.method {
            CompressionMethod::Stored => raw.to_vec(),
            CompressionMethod::Deflate => {
                let mut out = Vec::with_capacity(entry.uncompressed_size as usize);
                DeflateDecoder::new(raw)
                    .read_to_end(&mut out)
                    .with_context(|| format!("Failed to inflate entry {}", entry.name))?;
                out
            }
            CompressionMethod::Unknown(v) => {
                bail!("Unsupported compression method {} for entry {}", v, entry.name);
            }
        };

        let mut crc = flate2::Crc::new();
        crc.update(&decoded);
        if crc.sum() != entry.crc32 {
            bail!("CRC mismatch for entry {}", entry.name);
        }

        Ok(decoded)
    }

    /// Locate the start of an entry's data.
    ///
    /// The Local File Header has its own copies of the variable-length
    /// filename and extra field, which may differ from the Central
    /// Directory's, so the lengths must be re-read from the LFH itself.
    fn data_offset(&self, entry: &EntryRecord) -> Result<usize> {
        let lfh_start = entry.lfh_offset as usize;
        let lfh_end = lfh_start + LFH_SIZE;
        if lfh_end > self.data.len() || &self.data[lfh_start..lfh_start + 4] != LFH_SIGNATURE {
            bail!("Invalid Local File Header");
        }

        let mut cursor = Cursor::new(&self.data[lfh_start..lfh_end]);
        cursor.set_position(26); // Offset to filename length field
        let file_name_length = cursor.read_u16::<LittleEndian>()? as usize;
        let extra_field_length = cursor.read_u16::<LittleEndian>()? as usize;

        Ok(lfh_end + file_name_length + extra_field_length)
    }
}

/// Find and parse the End of Central Directory record.
///
/// Handles both the common case (no archive comment, EOCD exactly at the
/// tail) and commented archives by searching backwards for the signature
/// and cross-checking the comment length field.
fn find_eocd(data: &[u8]) -> Result<(EndOfCentralDirectory, usize)> {
    // Common case first: zero-length comment.
    if data.len() >= EndOfCentralDirectory::SIZE {
        let offset = data.len() - EndOfCentralDirectory::SIZE;
        let tail = &data[offset..];
        if &tail[0..4] == EndOfCentralDirectory::SIGNATURE && &tail[20..22] == b"\x00\x00" {
            return Ok((EndOfCentralDirectory::from_bytes(tail)?, offset));
        }
    }

    // A comment pushes the EOCD earlier; search backwards through the
    // maximum comment span for the signature.
    let search_size = (MAX_COMMENT_SIZE + EndOfCentralDirectory::SIZE).min(data.len());
    let search_start = data.len() - search_size;
    let window = &data[search_start..];

    for i in (0..window.len().saturating_sub(EndOfCentralDirectory::SIZE)).rev() {
        if &window[i..i + 4] == EndOfCentralDirectory::SIGNATURE {
            // Candidate found; the comment length field must account for
            // every byte after the fixed record.
            let comment_len = u16::from_le_bytes([window[i + 20], window[i + 21]]) as usize;
            if comment_len == window.len() - i - EndOfCentralDirectory::SIZE {
                let eocd = EndOfCentralDirectory::from_bytes(
                    &window[i..i + EndOfCentralDirectory::SIZE],
                )?;
                return Ok((eocd, search_start + i));
            }
        }
    }

    bail!("Not a valid ZIP file")
}

/// Parse one Central Directory File Header from a cursor.
fn parse_cdfh(cursor: &mut Cursor<&[u8]>) -> Result<EntryRecord> {
    let mut sig = [0u8; 4];
    cursor.read_exact(&mut sig)?;
    if sig != CDFH_SIGNATURE {
        bail!("Invalid Central Directory File Header");
    }

    let _version_made_by = cursor.read_u16::<LittleEndian>()?;
    let _version_needed = cursor.read_u16::<LittleEndian>()?;
    let _flags = cursor.read_u16::<LittleEndian>()?;
    let method = cursor.read_u16::<LittleEndian>()?;
    let _last_mod_time = cursor.read_u16::<LittleEndian>()?;
    let _last_mod_date = cursor.read_u16::<LittleEndian>()?;
    let crc32 = cursor.read_u32::<LittleEndian>()?;
    let compressed_size = cursor.read_u32::<LittleEndian>()? as u64;
    let uncompressed_size = cursor.read_u32::<LittleEndian>()? as u64;
    let file_name_length = cursor.read_u16::<LittleEndian>()?;
    let extra_field_length = cursor.read_u16::<LittleEndian>()?;
    let file_comment_length = cursor.read_u16::<LittleEndian>()?;
    let _disk_number_start = cursor.read_u16::<LittleEndian>()?;
    let _internal_attrs = cursor.read_u16::<LittleEndian>()?;
    let _external_attrs = cursor.read_u32::<LittleEndian>()?;
    let lfh_offset = cursor.read_u32::<LittleEndian>()? as u64;

    let mut name_bytes = vec![0u8; file_name_length as usize];
    cursor.read_exact(&mut name_bytes)?;
    // Lossy conversion keeps non-UTF8 names from aborting the walk.
    let name = String::from_utf8_lossy(&name_bytes).to_string();

    // Directory entries end with '/'
    let is_directory = name.ends_with('/');

    // Extra field and comment are unused; skip both.
    let skip = extra_field_length as u64 + file_comment_length as u64;
    cursor.set_position(cursor.position() + skip);

    Ok(EntryRecord {
        name,
        method: CompressionMethod::from_u16(method),
        compressed_size,
        uncompressed_size,
        crc32,
        lfh_offset,
        is_directory,
    })
}
