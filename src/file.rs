use std::fs;
use std::io;
use std::path::Path;

/// Write a finished deck to disk, one file per configuration
pub fn write_deck<P: AsRef<Path>>(path: P, deck: &str) -> io::Result<()> {
    fs::write(path, deck)
}

/// Echo a deck file back to the console for a quick visual check
pub fn echo_deck<P: AsRef<Path>>(path: P) -> io::Result<()> {
    let text = fs::read_to_string(path)?;
    print!("{}", text);
    Ok(())
}
