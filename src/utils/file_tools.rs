// Various file tools needed throughout the code.

use anyhow::Result;
use flate2::read::GzDecoder;
use log::warn;
use std::fs::File;
use std::io::{BufRead, Error, Read};
use std::path::Path;
use std::{fs, io};

/// Opens `filename` for line-by-line reading, decompressing it on the fly
/// when the name ends in `.gz`.
pub fn read_lines(filename: &Path) -> io::Result<io::Lines<io::BufReader<Box<dyn Read>>>> {
    // This creates a buffer to read lines
    let file = File::open(filename)?;
    let reader: Box<dyn Read> = if filename.extension().is_some_and(|ext| ext == "gz") {
        Box::new(GzDecoder::new(file))
    } else {
        Box::new(file)
    };
    Ok(io::BufReader::new(reader).lines())
}

/// Opens a file for writing. Without `overwrite_file` an existing file is
/// never touched and an error is returned instead.
pub fn open_file(filename: &Path, overwrite_file: bool) -> Result<File, Error> {
    if overwrite_file && filename.exists() {
        File::options().truncate(true).write(true).open(filename)
    } else {
        File::options().create_new(true).append(true).open(filename)
    }
}

pub fn check_create_dir(path_to_check: &Path) -> Result<()> {
    if !path_to_check.is_dir() {
        warn!("Directory not found, creating: {:?}", path_to_check);
        fs::create_dir_all(path_to_check)?
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempdir::TempDir;

    #[test]
    fn test_open_file_no_clobber() -> Result<()> {
        let tmp_dir = TempDir::new("gc_profiler")?;
        let path = tmp_dir.path().join("out.csv");
        let mut f = open_file(&path, false)?;
        writeln!(f, "first")?;
        assert!(open_file(&path, false).is_err());
        let mut f = open_file(&path, true)?;
        writeln!(f, "second")?;
        assert_eq!(fs::read_to_string(&path)?, "second\n");
        Ok(())
    }

    #[test]
    fn test_check_create_dir() -> Result<()> {
        let tmp_dir = TempDir::new("gc_profiler")?;
        let nested = tmp_dir.path().join("a/b");
        check_create_dir(&nested)?;
        assert!(nested.is_dir());
        Ok(())
    }
}
