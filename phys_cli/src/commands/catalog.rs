use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use phys_core::equations::generate_equations_markdown;

pub fn run(output: Option<PathBuf>) {
    match output {
        Some(path) => match write_catalog(&path) {
            Ok(bytes) => tracing::info!(path = %path.display(), bytes, "wrote equations reference"),
            Err(e) => {
                eprintln!("error: failed to write {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => print!("{}", generate_equations_markdown()),
    }
}

/// Write the markdown catalog to `path`, returning the number of bytes written.
fn write_catalog(path: &Path) -> io::Result<usize> {
    let markdown = generate_equations_markdown();
    fs::write(path, &markdown)?;
    Ok(markdown.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_catalog() {
        let path = std::env::temp_dir().join(format!("physolve-catalog-{}.md", std::process::id()));
        let bytes = write_catalog(&path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written.len(), bytes);
        assert!(written.starts_with("# Physolve Equations Reference"));
        assert!(written.contains("j2"));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_catalog_to_missing_directory_fails() {
        let path = std::env::temp_dir().join("physolve-no-such-dir").join("EQUATIONS.md");
        assert!(write_catalog(&path).is_err());
    }
}
