use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::comic::{ComicInfoProvider, newest_comic_number};

pub const DEFAULT_WIDTH: i32 = 1000;
pub const DEFAULT_HEIGHT: i32 = 800;

/// Geometry of the main window and the properties dialog, plus the last
/// viewed comic, as persisted between runs.
///
/// While `maximized` is set, the window geometry is the one from before the
/// window was maximized. Properties geometry only matters when
/// `properties_visible` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WindowState {
    pub comic_number: i32,
    pub height: i32,
    pub width: i32,
    pub position_x: i32,
    pub position_y: i32,
    pub maximized: bool,

    pub properties_visible: bool,
    pub properties_height: i32,
    pub properties_width: i32,
    pub properties_position_x: i32,
    pub properties_position_y: i32,
}

/// How a read populated the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    Decoded,
    Defaulted,
}

impl WindowState {
    /// Decodes the first JSON value of `reader` onto `self`. Anything
    /// undecodable falls back to defaults instead of failing.
    pub fn read<R: Read>(&mut self, reader: R, provider: &dyn ComicInfoProvider) -> LoadSource {
        let decoded = serde_json::Deserializer::from_reader(reader)
            .into_iter::<Value>()
            .next()
            .unwrap_or_else(|| Err(serde::de::Error::custom("empty state")))
            .and_then(|value| self.merged_with(value));
        match decoded {
            Ok(state) => {
                *self = state;
                LoadSource::Decoded
            }
            Err(err) => {
                log::warn!("Reading state: {err}");
                self.apply_defaults(provider);
                LoadSource::Defaulted
            }
        }
    }

    /// Overlays the keys of `value` on a copy of `self`. Keys match field
    /// names ignoring ASCII case, `null` fields keep their current value and
    /// a top-level `null` changes nothing.
    fn merged_with(&self, value: Value) -> serde_json::Result<WindowState> {
        let fields = match value {
            Value::Null => return Ok(self.clone()),
            Value::Object(fields) => fields,
            _ => return Err(serde::de::Error::custom("state is not a JSON object")),
        };
        let Value::Object(mut merged) = serde_json::to_value(self)? else {
            return Err(serde::de::Error::custom("state is not a JSON object"));
        };
        let names: Vec<String> = merged.keys().cloned().collect();
        // exact keys go last so they win over case-folded duplicates
        let (exact, folded): (Vec<_>, Vec<_>) = fields
            .into_iter()
            .partition(|(key, _)| merged.contains_key(key));
        for (key, value) in folded.into_iter().chain(exact) {
            if value.is_null() {
                continue;
            }
            if let Some(name) = names.iter().find(|name| name.eq_ignore_ascii_case(&key)) {
                merged.insert(name.clone(), value);
            }
        }
        WindowState::deserialize(Value::Object(merged))
    }

    pub fn read_file(&mut self, path: &Path, provider: &dyn ComicInfoProvider) -> LoadSource {
        match File::open(path) {
            Ok(file) => self.read(BufReader::new(file), provider),
            Err(err) => {
                log::info!("Reading state from {}: {err}", path.display());
                self.apply_defaults(provider);
                LoadSource::Defaulted
            }
        }
    }

    pub fn write<W: Write>(&self, mut writer: W) -> Result<()> {
        serde_json::to_writer(&mut writer, self).context("Serialize window state")?;
        writer.write_all(b"\n").context("Write window state")
    }

    pub fn write_file(&self, path: &Path) -> Result<()> {
        let file = match File::create(path) {
            Ok(file) => file,
            Err(err) => {
                log::warn!("Writing state to {}: {err}", path.display());
                return Err(err).with_context(|| format!("Failed to create {}", path.display()));
            }
        };
        let mut writer = BufWriter::new(file);
        self.write(&mut writer)?;
        writer
            .flush()
            .with_context(|| format!("Failed to write {}", path.display()))
    }

    fn apply_defaults(&mut self, provider: &dyn ComicInfoProvider) {
        self.comic_number = newest_comic_number(provider);
        self.height = DEFAULT_HEIGHT;
        self.width = DEFAULT_WIDTH;
    }
}
