//! Clean the public directory

use anyhow::Result;
use std::fs;

use crate::Skinforge;

/// Delete the generated output
pub fn run(app: &Skinforge) -> Result<()> {
    if app.public_dir.exists() {
        fs::remove_dir_all(&app.public_dir)?;
        tracing::info!("Deleted: {:?}", app.public_dir);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_clean_removes_public_dir() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("public/sub")).unwrap();
        fs::write(dir.path().join("public/index.html"), "x").unwrap();

        let app = Skinforge::new(dir.path()).unwrap();
        run(&app).unwrap();

        assert!(!dir.path().join("public").exists());
        // Cleaning twice is fine
        run(&app).unwrap();
    }
}
