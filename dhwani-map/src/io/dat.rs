//! Plain-text `.dat` occupancy dump.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::info;

use crate::compositor::GlobalMap;
use crate::error::{MapError, Result};

/// Write a map as text, `field_width` characters per value.
pub fn write_global_map<W: Write>(writer: &mut W, map: &GlobalMap, field_width: usize) -> Result<()> {
    for x in 0..map.width() {
        for value in map.row(x) {
            write!(writer, "{value:>field_width$} ")?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Write a map to a file, replacing any existing file.
pub fn save_global_map(path: &Path, map: &GlobalMap, field_width: usize) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_global_map(&mut writer, map, field_width)?;
    writer.flush()?;

    info!(
        "MapExport: wrote {}x{} map ({} occupied) to {}",
        map.width(),
        map.height(),
        map.occupied_count(),
        path.display()
    );
    Ok(())
}

/// Parse a text dump of known dimensions.
///
/// Expects `width` non-blank lines of `height` whitespace-separated `0`/`1`
/// tokens. Blank lines are skipped; anything else is a parse error.
pub fn read_global_map<R: BufRead>(reader: R, width: usize, height: usize) -> Result<GlobalMap> {
    let mut cells = vec![0u8; width * height];
    let mut x = 0;

    for (line_index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = line_index + 1;
        if line.trim().is_empty() {
            continue;
        }
        if x >= width {
            return Err(MapError::Parse {
                line: line_number,
                message: format!("more than {width} rows"),
            });
        }

        let mut y = 0;
        for token in line.split_whitespace() {
            if y >= height {
                return Err(MapError::Parse {
                    line: line_number,
                    message: format!("more than {height} values"),
                });
            }
            cells[y * width + x] = match token {
                "0" => 0,
                "1" => 1,
                other => {
                    return Err(MapError::Parse {
                        line: line_number,
                        message: format!("unexpected value {other:?}"),
                    });
                }
            };
            y += 1;
        }
        if y != height {
            return Err(MapError::Parse {
                line: line_number,
                message: format!("expected {height} values, found {y}"),
            });
        }
        x += 1;
    }

    if x != width {
        return Err(MapError::Parse {
            line: x + 1,
            message: format!("expected {width} rows, found {x}"),
        });
    }

    GlobalMap::from_cells(width, height, cells).ok_or_else(|| MapError::Parse {
        line: 0,
        message: "cell buffer does not match dimensions".to_string(),
    })
}

/// Read a text dump from a file.
pub fn load_global_map(path: &Path, width: usize, height: usize) -> Result<GlobalMap> {
    let file = File::open(path)?;
    read_global_map(BufReader::new(file), width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GridCoord;

    fn sample_map() -> GlobalMap {
        // width 3 (rows), height 2 (columns); (x=1, y=0) and (x=2, y=1) occupied
        GlobalMap::from_cells(3, 2, vec![0, 1, 0, 0, 0, 1]).unwrap()
    }

    #[test]
    fn test_exact_text_layout() {
        let mut out = Vec::new();
        write_global_map(&mut out, &sample_map(), 4).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text, "   0    0 \n   1    0 \n   0    1 \n");
    }

    #[test]
    fn test_field_width() {
        let mut out = Vec::new();
        write_global_map(&mut out, &sample_map(), 1).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0 0 \n1 0 \n0 1 \n");
    }

    #[test]
    fn test_read_back() {
        let map = read_global_map("   0    0 \n   1    0 \n\n   0    1 \n".as_bytes(), 3, 2).unwrap();
        assert_eq!(map, sample_map());
        assert!(map.is_occupied(GridCoord::new(1, 0)));
        assert!(map.is_occupied(GridCoord::new(2, 1)));
    }

    #[test]
    fn test_read_rejects_malformed() {
        let short_row = read_global_map("0 0\n1\n0 1\n".as_bytes(), 3, 2);
        assert!(matches!(short_row, Err(MapError::Parse { line: 2, .. })));

        let bad_token = read_global_map("0 0\n1 7\n0 1\n".as_bytes(), 3, 2);
        assert!(matches!(bad_token, Err(MapError::Parse { line: 2, .. })));

        let missing_row = read_global_map("0 0\n1 0\n".as_bytes(), 3, 2);
        assert!(matches!(missing_row, Err(MapError::Parse { .. })));

        let extra_row = read_global_map("0 0\n1 0\n0 1\n0 0\n".as_bytes(), 3, 2);
        assert!(matches!(extra_row, Err(MapError::Parse { line: 4, .. })));
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("robot_map.dat");

        save_global_map(&path, &sample_map(), 4).unwrap();
        let loaded = load_global_map(&path, 3, 2).unwrap();
        assert_eq!(loaded, sample_map());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_global_map(&dir.path().join("absent.dat"), 3, 2);
        assert!(matches!(result, Err(MapError::Io(_))));
    }
}
