use std::{
    path::{Path, PathBuf},
    fs::File,
    io::{
        BufReader,
        BufWriter,
    },
};
use serde::{Serialize, Deserialize};
use anyhow::*;


pub const SETTINGS_FILE_NAME: &'static str = "gui_settings.json";


/// Settings for the demo host loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostSettings {
    /// Number of frames to draw.
    pub frames: u32,
    /// Frame interpolation fraction passed to every draw.
    pub partial_ticks: f32,
    /// Hit-testing policy of the root container.
    pub advanced_hit_test: bool,
    /// Log each recorded frame as pseudo-XML.
    pub dump_frames: bool,
    /// Also write logs to this file.
    pub log_file: Option<PathBuf>,
}

impl Default for HostSettings {
    fn default() -> Self {
        HostSettings {
            frames: 3,
            partial_ticks: 0.5,
            advanced_hit_test: false,
            dump_frames: false,
            log_file: None,
        }
    }
}

impl HostSettings {
    pub fn read(path: impl AsRef<Path>) -> Self {
        Self::try_read(path).unwrap_or_default()
    }

    pub fn try_read(path: impl AsRef<Path>) -> Result<Self> {
        Ok(serde_json::from_reader(BufReader::new(File::open(path)?))?)
    }

    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        serde_json::to_writer_pretty(BufWriter::new(File::create(path)?), self)?;
        Ok(())
    }
}


#[test]
fn test_partial_settings_fill_defaults() {
    let s: HostSettings = serde_json::from_str(r#"{ "frames": 10, "dump_frames": true }"#).unwrap();
    assert_eq!(s.frames, 10);
    assert!(s.dump_frames);
    assert_eq!(s.partial_ticks, HostSettings::default().partial_ticks);
    assert_eq!(s.log_file, None);
}

#[test]
fn test_missing_file_reads_default() {
    let s = HostSettings::read("this/path/does/not/exist.json");
    assert_eq!(s, HostSettings::default());
}

#[test]
fn test_defaults_survive_write_and_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(SETTINGS_FILE_NAME);
    HostSettings::default().write(&path).unwrap();
    assert_eq!(HostSettings::try_read(&path).unwrap(), HostSettings::default());
}
