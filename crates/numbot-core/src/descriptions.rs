use std::{collections::HashMap, fs, path::Path, sync::OnceLock};

use regex::Regex;

use crate::{errors::Error, Result};

/// Reply used whenever a number has no entry in the table.
pub const NOT_FOUND: &str = "Описание не найдено.";

fn header_re() -> &'static Regex {
    static HEADER: OnceLock<Regex> = OnceLock::new();
    HEADER.get_or_init(|| Regex::new(r"^(\d{1,2}):$").expect("valid regex"))
}

/// Number → description text, built once from the static resource.
///
/// Resource format: a `NN:` header line (one or two digits) starts an entry;
/// every following line up to the next header belongs to it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DescriptionTable {
    entries: HashMap<u32, String>,
}

impl DescriptionTable {
    pub fn parse(content: &str) -> Self {
        let mut entries = HashMap::new();
        let mut current: Option<u32> = None;
        let mut buffer: Vec<&str> = Vec::new();

        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        for raw in content.lines() {
            let line = raw.trim();
            if let Some(caps) = header_re().captures(line) {
                flush(&mut entries, current, &buffer);
                // Two ASCII digits always fit.
                current = caps[1].parse::<u32>().ok();
                buffer.clear();
            } else if current.is_some() {
                buffer.push(line);
            }
        }
        flush(&mut entries, current, &buffer);

        Self { entries }
    }

    /// Strict load: any read failure is an error.
    pub fn try_load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::Table {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(Self::parse(&content))
    }

    /// Degrading load: a missing or unreadable resource yields an empty table.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(table) => {
                tracing::info!(
                    path = %path.display(),
                    entries = table.len(),
                    "description table loaded"
                );
                table
            }
            Err(e) => {
                tracing::warn!("{e}; every lookup will fall back to \"{NOT_FOUND}\"");
                Self::default()
            }
        }
    }

    pub fn get(&self, key: u32) -> Option<&str> {
        self.entries.get(&key).map(String::as_str)
    }

    pub fn lookup(&self, key: u32) -> &str {
        self.get(key).unwrap_or(NOT_FOUND)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn flush(entries: &mut HashMap<u32, String>, key: Option<u32>, buffer: &[&str]) {
    let Some(key) = key else {
        return;
    };
    let text = buffer.join("\n").trim().to_string();
    if !text.is_empty() {
        // Later duplicates win.
        entries.insert(key, text);
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn parses_two_blocks() {
        let t = DescriptionTable::parse("5:\nfoo\nbar\n12:\nbaz\n");
        assert_eq!(t.len(), 2);
        assert_eq!(t.get(5), Some("foo\nbar"));
        assert_eq!(t.get(12), Some("baz"));
    }

    #[test]
    fn lookup_falls_back_for_missing_key() {
        let t = DescriptionTable::parse("1:\nединица\n");
        assert_eq!(t.lookup(1), "единица");
        assert_eq!(t.lookup(2), NOT_FOUND);
    }

    #[test]
    fn trims_block_edges_but_keeps_inner_blank_lines() {
        let t = DescriptionTable::parse("3:\n\n  first  \n\nsecond\n\n\n4:\nx");
        assert_eq!(t.get(3), Some("first\n\nsecond"));
        assert_eq!(t.get(4), Some("x"));
    }

    #[test]
    fn text_before_first_header_is_dropped() {
        let t = DescriptionTable::parse("preamble\n7:\nseven\n");
        assert_eq!(t.len(), 1);
        assert_eq!(t.get(7), Some("seven"));
    }

    #[test]
    fn later_duplicate_overwrites_earlier() {
        let t = DescriptionTable::parse("9:\nold\n9:\nnew\n");
        assert_eq!(t.len(), 1);
        assert_eq!(t.get(9), Some("new"));
    }

    #[test]
    fn leading_byte_order_mark_is_ignored() {
        let t = DescriptionTable::parse("\u{feff}1:\none\n2:\ntwo\n");
        assert_eq!(t.get(1), Some("one"));
        assert_eq!(t.get(2), Some("two"));
    }

    #[test]
    fn key_zero_is_kept() {
        let t = DescriptionTable::parse("0:\nzero\n1:\none\n");
        assert_eq!(t.get(0), Some("zero"));
        assert_eq!(t.get(1), Some("one"));

        let t = DescriptionTable::parse("00:\nzero\n");
        assert_eq!(t.get(0), Some("zero"));
    }

    #[test]
    fn empty_blocks_are_skipped() {
        let t = DescriptionTable::parse("1:\n\n2:\ntwo\n3:\n");
        assert_eq!(t.get(1), None);
        assert_eq!(t.get(2), Some("two"));
        assert_eq!(t.get(3), None);
    }

    #[test]
    fn only_short_numeric_headers_start_entries() {
        let t = DescriptionTable::parse("1:\nline\n123:\nnot a header\n2: inline\n");
        assert_eq!(t.len(), 1);
        assert_eq!(t.get(1), Some("line\n123:\nnot a header\n2: inline"));
    }

    #[test]
    fn indented_header_is_recognized() {
        let t = DescriptionTable::parse("  8:  \neight\n");
        assert_eq!(t.get(8), Some("eight"));
    }

    #[test]
    fn shipped_resource_covers_every_reduced_number() {
        let t = DescriptionTable::parse(include_str!("../../../numerology_data.txt"));
        for key in 1..=crate::reducer::REDUCTION_THRESHOLD {
            assert!(t.get(key).is_some(), "missing entry {key}");
        }
    }

    #[test]
    fn missing_resource_degrades_to_empty_table() {
        let path = PathBuf::from(format!(
            "/tmp/numbot-missing-{}/numerology_data.txt",
            std::process::id()
        ));
        assert!(matches!(
            DescriptionTable::try_load(&path),
            Err(Error::Table { .. })
        ));

        let t = DescriptionTable::load(&path);
        assert!(t.is_empty());
        assert_eq!(t.lookup(4), NOT_FOUND);
    }

    #[test]
    fn loads_resource_from_disk() {
        let path = PathBuf::from(format!("/tmp/numbot-table-{}.txt", std::process::id()));
        std::fs::write(&path, "4:\nЧетвёрка\nстроитель\n").unwrap();

        let t = DescriptionTable::load(&path);
        assert_eq!(t.get(4), Some("Четвёрка\nстроитель"));

        let _ = std::fs::remove_file(&path);
    }
}
