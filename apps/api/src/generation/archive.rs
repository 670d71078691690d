//! In-memory zip assembly for the generated site bundle.

use std::io::{Cursor, Write};

use anyhow::Result;
use bytes::Bytes;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Builds the three-entry site archive entirely in memory.
///
/// Entry names are fixed: `index.html`, `style.css`, `script.js`. Each new
/// archive is self-contained — entries are never merged with or appended to a
/// previous archive.
pub fn build_site_archive(markup: &str, styling: &str, behavior: &str) -> Result<Bytes> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for (name, content) in [
        ("index.html", markup),
        ("style.css", styling),
        ("script.js", behavior),
    ] {
        writer.start_file(name, options)?;
        writer.write_all(content.as_bytes())?;
    }

    let cursor = writer.finish()?;
    Ok(Bytes::from(cursor.into_inner()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use zip::ZipArchive;

    fn read_entry(archive: &mut ZipArchive<Cursor<Vec<u8>>>, name: &str) -> String {
        let mut entry = archive.by_name(name).expect("entry missing");
        let mut content = String::new();
        entry.read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn test_archive_has_exactly_three_named_entries() {
        let bytes = build_site_archive("<h1>Hi</h1>", "h1 { color: red; }", "console.log(1);")
            .unwrap();

        let mut archive = ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
        assert_eq!(archive.len(), 3);
        assert_eq!(read_entry(&mut archive, "index.html"), "<h1>Hi</h1>");
        assert_eq!(read_entry(&mut archive, "style.css"), "h1 { color: red; }");
        assert_eq!(read_entry(&mut archive, "script.js"), "console.log(1);");
    }

    #[test]
    fn test_entries_are_deflate_compressed() {
        let styling = "body { margin: 0; } ".repeat(64);
        let bytes = build_site_archive("<p>x</p>", &styling, "// noop").unwrap();

        let mut archive = ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
        let entry = archive.by_name("style.css").unwrap();
        assert_eq!(entry.compression(), CompressionMethod::Deflated);
        assert!(entry.compressed_size() < entry.size());
    }

    #[test]
    fn test_rebuilding_does_not_accumulate_entries() {
        let first = build_site_archive("a", "b", "c").unwrap();
        let second = build_site_archive("x", "y", "z").unwrap();

        let mut archive = ZipArchive::new(Cursor::new(second.to_vec())).unwrap();
        assert_eq!(archive.len(), 3);
        assert_eq!(read_entry(&mut archive, "index.html"), "x");
        drop(first);
    }
}
