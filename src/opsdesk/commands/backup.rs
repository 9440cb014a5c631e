use crate::commands::{CmdMessage, CmdResult};
use crate::error::{OpsError, Result};
use chrono::Utc;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::path::{Path, PathBuf};

/// One dataset serialized for archival: file stem and JSON content.
pub type BackupEntry = (String, String);

/// Writes every dataset as a JSON file inside one `.tar.gz` archive.
pub fn execute(entries: &[BackupEntry], out_dir: &Path) -> Result<CmdResult<()>> {
    if !out_dir.exists() {
        std::fs::create_dir_all(out_dir).map_err(OpsError::Io)?;
    }

    let path = archive_path(out_dir);
    let file = File::create(&path).map_err(OpsError::Io)?;
    let encoder = GzEncoder::new(file, Compression::default());
    let mut archive = tar::Builder::new(encoder);

    for (name, content) in entries {
        let bytes = content.as_bytes();
        let mut header = tar::Header::new_gnu();
        header.set_size(bytes.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        archive
            .append_data(&mut header, format!("opsdesk/{}.json", name), bytes)
            .map_err(OpsError::Io)?;
    }

    let encoder = archive.into_inner().map_err(OpsError::Io)?;
    encoder.finish().map_err(OpsError::Io)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Backed up {} datasets to {}",
        entries.len(),
        path.display()
    )));
    Ok(result.with_artifact(path))
}

fn archive_path(out_dir: &Path) -> PathBuf {
    let stamp = Utc::now().format("%Y-%m-%d_%H%M%S");
    out_dir.join(format!("opsdesk-backup-{}.tar.gz", stamp))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::io::Read;
    use tempfile::TempDir;

    #[test]
    fn test_backup_contains_every_dataset() {
        let dir = TempDir::new().unwrap();
        let entries = vec![
            ("leads".to_string(), "[{\"id\":\"LD-1\"}]".to_string()),
            ("tickets".to_string(), "[]".to_string()),
        ];
        let result = execute(&entries, dir.path()).unwrap();

        let path = result.artifact.unwrap();
        assert!(path.to_str().unwrap().ends_with(".tar.gz"));

        let file = File::open(&path).unwrap();
        let mut archive = tar::Archive::new(GzDecoder::new(file));
        let mut names = Vec::new();
        for entry in archive.entries().unwrap() {
            let mut entry = entry.unwrap();
            names.push(entry.path().unwrap().to_string_lossy().into_owned());
            if names.last().map(String::as_str) == Some("opsdesk/leads.json") {
                let mut content = String::new();
                entry.read_to_string(&mut content).unwrap();
                assert!(content.contains("LD-1"));
            }
        }
        names.sort();
        assert_eq!(names, vec!["opsdesk/leads.json", "opsdesk/tickets.json"]);
    }
}
