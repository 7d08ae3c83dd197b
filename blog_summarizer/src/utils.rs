use std::fs::File;
use std::io::Write;
use std::path::Path;

pub fn save_json(data: &serde_json::Value, path: &Path) -> anyhow::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(data)?.as_bytes())?;
    tracing::info!(path = %path.display(), "file written");
    Ok(())
}

pub fn save_text(content: &str, path: &Path) -> anyhow::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    tracing::info!(path = %path.display(), "file written");
    Ok(())
}
