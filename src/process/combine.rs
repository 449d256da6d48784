use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// One globbed directory of the combined output.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub dir: PathBuf,
    pub extension: String,
    /// Write the file name on its own line before the contents.
    pub with_name: bool,
}

impl Section {
    pub fn new(dir: impl Into<PathBuf>, extension: &str) -> Self {
        Section {
            dir: dir.into(),
            extension: extension.to_string(),
            with_name: false,
        }
    }

    pub fn named(mut self) -> Self {
        self.with_name = true;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CombineConfig {
    pub root: PathBuf,
    pub sections: Vec<Section>,
    pub build_file: PathBuf,
    pub test_file: PathBuf,
    pub output: PathBuf,
}

impl CombineConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        CombineConfig {
            root: root.into(),
            ..Self::default()
        }
    }
}

impl Default for CombineConfig {
    fn default() -> Self {
        CombineConfig {
            root: PathBuf::from("."),
            sections: vec![
                Section::new("src", "cpp"),
                Section::new("include", "h"),
                Section::new("scenes", "json").named(),
            ],
            build_file: PathBuf::from("Makefile"),
            test_file: PathBuf::from("test/test_scene_loader.cpp"),
            output: PathBuf::from("combined.txt"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CombineReport {
    pub files: Vec<PathBuf>,
    pub bytes: usize,
}

/// Concatenates every configured file into `config.output`, replacing
/// whatever was there. Output is written as it goes, so a failure part way
/// leaves a truncated file behind.
pub fn combine_files(config: &CombineConfig) -> Result<CombineReport> {
    let output = &config.output;
    let file = File::create(output).map_err(|e| Error::io(output, e))?;
    let mut writer = BufWriter::new(file);
    let report = combine_into(config, &mut writer)?;
    writer.flush().map_err(|e| Error::io(output, e))?;
    log::info!(
        "wrote {} files ({} bytes) to {}",
        report.files.len(),
        report.bytes,
        output.display()
    );
    Ok(report)
}

pub fn combine_into<W: Write>(config: &CombineConfig, writer: &mut W) -> Result<CombineReport> {
    let mut report = CombineReport::default();

    for section in &config.sections {
        for path in section_files(&config.root, section)? {
            append(writer, &path, section.with_name, &config.output, &mut report)?;
        }
    }
    append(writer, &config.root.join(&config.build_file), false, &config.output, &mut report)?;
    append(writer, &config.root.join(&config.test_file), false, &config.output, &mut report)?;

    Ok(report)
}

/// Files of one section in name order; the directory itself must exist.
fn section_files(root: &Path, section: &Section) -> Result<Vec<PathBuf>> {
    let dir = root.join(&section.dir);
    let meta = fs::metadata(&dir).map_err(|e| Error::io(&dir, e))?;
    if !meta.is_dir() {
        return Err(Error::io(
            &dir,
            std::io::Error::new(std::io::ErrorKind::NotFound, "not a directory"),
        ));
    }

    // glob yields paths sorted by name
    let pattern = format!(
        "{}/*.{}",
        glob::Pattern::escape(&dir.to_string_lossy()),
        section.extension
    );
    let mut files = Vec::new();
    for entry in glob::glob(&pattern)? {
        let path = entry?;
        if path.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}

fn append<W: Write>(
    writer: &mut W,
    path: &Path,
    with_name: bool,
    output: &Path,
    report: &mut CombineReport,
) -> Result<()> {
    let contents = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let mut written = 0;
    if with_name {
        let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
        writeln!(writer, "{}", name).map_err(|e| Error::io(output, e))?;
        written += name.len() + 1;
    }
    writeln!(writer, "{}", contents).map_err(|e| Error::io(output, e))?;
    written += contents.len() + 1;

    log::debug!("appended {} ({} bytes)", path.display(), written);
    report.files.push(path.to_path_buf());
    report.bytes += written;
    Ok(())
}
