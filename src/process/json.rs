use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Error, Result};

/// Path that selects stdout instead of a file.
pub const STDOUT: &str = "-";

pub fn read_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

/// Writes `value` as two-space indented JSON followed by a newline.
pub fn write_json<T: Serialize, P: AsRef<Path>>(value: &T, path: P) -> Result<()> {
    let path = path.as_ref();
    if path == Path::new(STDOUT) {
        let stdout = io::stdout();
        return write_pretty(value, stdout.lock()).map_err(|e| Error::io(path, e));
    }
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    write_pretty(value, BufWriter::new(file)).map_err(|e| Error::io(path, e))
}

fn write_pretty<T: Serialize, W: Write>(value: &T, mut writer: W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.write_all(b"\n")?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::scene::Scene;

    #[test]
    fn scene_survives_a_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.json");

        let scene = Scene::new();
        write_json(&scene, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("{\n  \"nbounces\": 8"));

        let loaded: Scene = read_json(&path).unwrap();
        assert_eq!(loaded, scene);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = read_json::<Scene, _>("does/not/exist.json").unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("exist.json"));
    }
}
