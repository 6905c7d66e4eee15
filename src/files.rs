use std::fs::File;
use std::io::Error;
use std::io::prelude::*;
use std::path::Path;

pub fn write_file(data: &[u8], file_path: &Path) -> Result<(), Error> {
    let mut file = File::create(file_path)?;
    file.write_all(data)?;
    Ok(())
}

/// File name for the persisted identicon of a word
pub fn identicon_file_name(word: &str) -> String {
    format!("{}.png", word)
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;
    use super::*;

    #[test]
    fn test_identicon_file_name() {
        assert_eq!(identicon_file_name("banana"), "banana.png");
    }

    #[test]
    fn test_write_file_overwrite_idempotent() {
        let output_dir = tempdir().unwrap();
        let file_path = output_dir.path().join("banana.png");
        let data = b"not really a png";
        write_file(data, &file_path).unwrap();
        write_file(data, &file_path).unwrap();
        let written = std::fs::read(&file_path).unwrap();
        assert_eq!(written, data);
    }
}
