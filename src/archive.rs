//! Pack distribution and world backup zips.
//!
//! A minimal ZIP writer: deflate entries with CRC-32, local headers, a
//! central directory and the end record. Entries are compressed into
//! memory first so sizes land in the headers directly and no data
//! descriptors are needed. Sticking to the 32-bit format is fine at
//! pack scale.

use crate::error::{PackError, Result};
use crate::workspace::{file_stamp, PackKind, Workspace};
use chrono::{Datelike, Local, Timelike};
use flate2::write::DeflateEncoder;
use flate2::Compression;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

const LOCAL_HEADER_SIG: u32 = 0x0403_4b50;
const CENTRAL_DIR_SIG: u32 = 0x0201_4b50;
const END_OF_CENTRAL_SIG: u32 = 0x0605_4b50;
const VERSION: u16 = 20;
const METHOD_STORED: u16 = 0;
const METHOD_DEFLATE: u16 = 8;

struct EntryRecord {
    name: String,
    method: u16,
    dos_time: u16,
    dos_date: u16,
    crc: u32,
    compressed: u32,
    uncompressed: u32,
    offset: u32,
}

/// Streaming ZIP writer over anything `Write`.
pub struct ZipWriter<W: Write> {
    out: W,
    offset: u32,
    entries: Vec<EntryRecord>,
}

impl<W: Write> ZipWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            offset: 0,
            entries: Vec::new(),
        }
    }

    /// Add one file entry. Deflate is used unless it would grow the
    /// data (tiny or already-compressed files are stored).
    pub fn add_file(
        &mut self,
        name: &str,
        data: &[u8],
        modified: chrono::DateTime<Local>,
    ) -> Result<()> {
        let uncompressed = u32::try_from(data.len())
            .map_err(|_| PackError::archive(format!("entry too large for zip: {}", name)))?;
        let crc = crc32fast::hash(data);

        let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).map_err(PackError::archive)?;
        let deflated = encoder.finish().map_err(PackError::archive)?;

        let (method, payload) = if deflated.len() < data.len() {
            (METHOD_DEFLATE, deflated)
        } else {
            (METHOD_STORED, data.to_vec())
        };
        self.write_entry(name, method, crc, &payload, uncompressed, modified)
    }

    /// Add a directory entry (name must end with `/`).
    pub fn add_dir(&mut self, name: &str, modified: chrono::DateTime<Local>) -> Result<()> {
        self.write_entry(name, METHOD_STORED, 0, &[], 0, modified)
    }

    fn write_entry(
        &mut self,
        name: &str,
        method: u16,
        crc: u32,
        payload: &[u8],
        uncompressed: u32,
        modified: chrono::DateTime<Local>,
    ) -> Result<()> {
        let compressed = u32::try_from(payload.len())
            .map_err(|_| PackError::archive(format!("entry too large for zip: {}", name)))?;
        let (dos_time, dos_date) = dos_datetime(modified);
        let offset = self.offset;

        let mut header = Vec::with_capacity(30 + name.len());
        header.extend(LOCAL_HEADER_SIG.to_le_bytes());
        header.extend(VERSION.to_le_bytes());
        header.extend(0u16.to_le_bytes()); // flags
        header.extend(method.to_le_bytes());
        header.extend(dos_time.to_le_bytes());
        header.extend(dos_date.to_le_bytes());
        header.extend(crc.to_le_bytes());
        header.extend(compressed.to_le_bytes());
        header.extend(uncompressed.to_le_bytes());
        header.extend((name.len() as u16).to_le_bytes());
        header.extend(0u16.to_le_bytes()); // extra length
        header.extend(name.as_bytes());

        self.out.write_all(&header).map_err(PackError::archive)?;
        self.out.write_all(payload).map_err(PackError::archive)?;
        self.offset = offset
            .checked_add(header.len() as u32)
            .and_then(|o| o.checked_add(compressed))
            .ok_or_else(|| PackError::archive("archive exceeds 4 GiB"))?;

        self.entries.push(EntryRecord {
            name: name.to_string(),
            method,
            dos_time,
            dos_date,
            crc,
            compressed,
            uncompressed,
            offset,
        });
        Ok(())
    }

    /// Write the central directory and end record, returning the inner
    /// writer.
    pub fn finish(mut self) -> Result<W> {
        let dir_start = self.offset;
        let mut dir_size = 0u32;
        for entry in &self.entries {
            let mut rec = Vec::with_capacity(46 + entry.name.len());
            rec.extend(CENTRAL_DIR_SIG.to_le_bytes());
            rec.extend(VERSION.to_le_bytes()); // made by
            rec.extend(VERSION.to_le_bytes()); // needed
            rec.extend(0u16.to_le_bytes()); // flags
            rec.extend(entry.method.to_le_bytes());
            rec.extend(entry.dos_time.to_le_bytes());
            rec.extend(entry.dos_date.to_le_bytes());
            rec.extend(entry.crc.to_le_bytes());
            rec.extend(entry.compressed.to_le_bytes());
            rec.extend(entry.uncompressed.to_le_bytes());
            rec.extend((entry.name.len() as u16).to_le_bytes());
            rec.extend(0u16.to_le_bytes()); // extra length
            rec.extend(0u16.to_le_bytes()); // comment length
            rec.extend(0u16.to_le_bytes()); // disk number
            rec.extend(0u16.to_le_bytes()); // internal attrs
            rec.extend(0u32.to_le_bytes()); // external attrs
            rec.extend(entry.offset.to_le_bytes());
            rec.extend(entry.name.as_bytes());
            self.out.write_all(&rec).map_err(PackError::archive)?;
            dir_size += rec.len() as u32;
        }

        let count = u16::try_from(self.entries.len())
            .map_err(|_| PackError::archive("too many entries for zip"))?;
        let mut end = Vec::with_capacity(22);
        end.extend(END_OF_CENTRAL_SIG.to_le_bytes());
        end.extend(0u16.to_le_bytes()); // this disk
        end.extend(0u16.to_le_bytes()); // dir start disk
        end.extend(count.to_le_bytes());
        end.extend(count.to_le_bytes());
        end.extend(dir_size.to_le_bytes());
        end.extend(dir_start.to_le_bytes());
        end.extend(0u16.to_le_bytes()); // comment length
        self.out.write_all(&end).map_err(PackError::archive)?;
        Ok(self.out)
    }
}

/// MS-DOS time/date pair as zip headers store it. Seconds come in
/// 2-second resolution; years before 1980 clamp to 1980.
fn dos_datetime(t: chrono::DateTime<Local>) -> (u16, u16) {
    let time =
        ((t.hour() as u16) << 11) | ((t.minute() as u16) << 5) | ((t.second() as u16) / 2);
    let year = t.year().clamp(1980, 2107) as u16;
    let date = ((year - 1980) << 9) | ((t.month() as u16) << 5) | (t.day() as u16);
    (time, date)
}

fn entry_mtime(path: &Path) -> chrono::DateTime<Local> {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .map(chrono::DateTime::<Local>::from)
        .unwrap_or_else(|_| Local::now())
}

/// Zip the contents of `dir` (not the directory itself) into the open
/// writer, entries in sorted path order.
pub fn zip_dir_contents<W: Write>(writer: &mut ZipWriter<W>, dir: &Path) -> Result<()> {
    zip_tree(writer, dir, String::new())
}

fn zip_tree<W: Write>(writer: &mut ZipWriter<W>, dir: &Path, prefix: String) -> Result<()> {
    let mut entries: Vec<_> = fs::read_dir(dir)?.flatten().collect();
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        if path.is_dir() {
            let dir_name = format!("{}{}/", prefix, name);
            writer.add_dir(&dir_name, entry_mtime(&path))?;
            zip_tree(writer, &path, dir_name)?;
        } else {
            let data = fs::read(&path)?;
            writer.add_file(&format!("{}{}", prefix, name), &data, entry_mtime(&path))?;
        }
    }
    Ok(())
}

/// Zip one pack into `<workspace>/<pack>.zip` with the pack contents at
/// the archive root, so `pack.mcmeta` sits top-level as launchers
/// expect. Returns the zip path.
pub fn zip_pack(ws: &Workspace, kind: PackKind, pack: &str) -> Result<PathBuf> {
    let pack_dir = ws.pack_dir(kind, pack);
    if !pack_dir.is_dir() {
        return Err(PackError::NotFound {
            path: pack_dir.display().to_string(),
        });
    }
    let zip_path = ws.root().join(format!("{}.zip", pack));
    write_zip_of(&pack_dir, &zip_path)?;
    tracing::info!(pack, path = %zip_path.display(), "wrote distribution zip");
    Ok(zip_path)
}

/// Zip a world save to `<world>_backup_<stamp>.zip` next to it.
pub fn backup_world(world_dir: &Path) -> Result<PathBuf> {
    if !world_dir.is_dir() {
        return Err(PackError::NotFound {
            path: world_dir.display().to_string(),
        });
    }
    let parent = world_dir.parent().unwrap_or(Path::new("."));
    let base = world_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| PackError::invalid("world path has no directory name"))?;
    let zip_path = parent.join(format!("{}_backup_{}.zip", base, file_stamp()));
    write_zip_of(world_dir, &zip_path)?;
    tracing::info!(world = %world_dir.display(), path = %zip_path.display(), "wrote world backup");
    Ok(zip_path)
}

fn write_zip_of(dir: &Path, zip_path: &Path) -> Result<()> {
    let file = File::create(zip_path)?;
    let mut writer = ZipWriter::new(BufWriter::new(file));
    zip_dir_contents(&mut writer, dir)?;
    writer
        .finish()?
        .into_inner()
        .map_err(|e| PackError::archive(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn le_u16(buf: &[u8], at: usize) -> u16 {
        u16::from_le_bytes([buf[at], buf[at + 1]])
    }

    fn le_u32(buf: &[u8], at: usize) -> u32 {
        u32::from_le_bytes([buf[at], buf[at + 1], buf[at + 2], buf[at + 3]])
    }

    #[test]
    fn test_zip_layout_and_crc() {
        let mut writer = ZipWriter::new(Vec::new());
        let data = b"say hello\nsay hello\nsay hello\n";
        writer.add_file("demo.mcfunction", data, Local::now()).unwrap();
        let buf = writer.finish().unwrap();

        // local header
        assert_eq!(le_u32(&buf, 0), LOCAL_HEADER_SIG);
        assert_eq!(le_u32(&buf, 14), crc32fast::hash(data));
        assert_eq!(le_u32(&buf, 22), data.len() as u32);
        assert_eq!(le_u16(&buf, 26), "demo.mcfunction".len() as u16);

        // end record points at one central entry
        let eocd = buf.len() - 22;
        assert_eq!(le_u32(&buf, eocd), END_OF_CENTRAL_SIG);
        assert_eq!(le_u16(&buf, eocd + 10), 1);
        let dir_start = le_u32(&buf, eocd + 16) as usize;
        assert_eq!(le_u32(&buf, dir_start), CENTRAL_DIR_SIG);
    }

    #[test]
    fn test_incompressible_data_is_stored() {
        let mut writer = ZipWriter::new(Vec::new());
        writer.add_file("tiny", b"x", Local::now()).unwrap();
        let buf = writer.finish().unwrap();
        assert_eq!(le_u16(&buf, 8), METHOD_STORED);
        // stored payload sits right after the 30-byte header + name
        assert_eq!(buf[30 + 4], b'x');
    }

    #[test]
    fn test_zip_pack_places_contents_at_root() {
        let temp = tempfile::tempdir().unwrap();
        let pack = temp.path().join("datapacks/demo");
        fs::create_dir_all(pack.join("data/demo/functions")).unwrap();
        fs::write(pack.join("pack.mcmeta"), "{}").unwrap();
        fs::write(pack.join("data/demo/functions/load.mcfunction"), "say hi").unwrap();

        let ws = Workspace::new(temp.path());
        let zip_path = zip_pack(&ws, PackKind::Data, "demo").unwrap();
        assert!(zip_path.ends_with("demo.zip"));

        let buf = fs::read(zip_path).unwrap();
        let names = entry_names(&buf);
        assert!(names.contains(&"pack.mcmeta".to_string()));
        assert!(names.contains(&"data/demo/functions/load.mcfunction".to_string()));
        assert!(!names.iter().any(|n| n.starts_with("demo/")));
    }

    #[test]
    fn test_backup_world_names_zip_after_world() {
        let temp = tempfile::tempdir().unwrap();
        let world = temp.path().join("my_world");
        fs::create_dir_all(world.join("region")).unwrap();
        fs::write(world.join("level.dat"), [1u8, 2, 3]).unwrap();

        let zip_path = backup_world(&world).unwrap();
        let name = zip_path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("my_world_backup_"));
        assert!(name.ends_with(".zip"));
        assert!(entry_names(&fs::read(zip_path).unwrap()).contains(&"level.dat".to_string()));
    }

    #[test]
    fn test_missing_pack_is_not_found() {
        let temp = tempfile::tempdir().unwrap();
        let ws = Workspace::new(temp.path());
        let err = zip_pack(&ws, PackKind::Data, "nope").unwrap_err();
        assert!(matches!(err, PackError::NotFound { .. }));
    }

    /// Walk local headers to collect entry names.
    fn entry_names(buf: &[u8]) -> Vec<String> {
        let mut names = Vec::new();
        let mut pos = 0;
        while pos + 30 <= buf.len() && le_u32(buf, pos) == LOCAL_HEADER_SIG {
            let csize = le_u32(buf, pos + 18) as usize;
            let name_len = le_u16(buf, pos + 26) as usize;
            names.push(String::from_utf8_lossy(&buf[pos + 30..pos + 30 + name_len]).into_owned());
            pos += 30 + name_len + csize;
        }
        names
    }
}
