use std::path::{Path, PathBuf};

use crate::comic::ComicInfoProvider;
use crate::geometry::{WindowGeometry, WindowPlacement};
use crate::paths::AppPaths;
use crate::state_store::{LoadSource, WindowState};

/// Result of persisting the window state at shutdown. Failures are
/// reported here and logged, never propagated.
#[derive(Debug)]
pub enum SaveReport {
    Saved(PathBuf),
    Failed { path: PathBuf, error: anyhow::Error },
}

impl SaveReport {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveReport::Saved(_))
    }
}

/// Owns the persisted state of the main window for one run.
pub struct WindowController {
    state: WindowState,
    state_file: PathBuf,
}

impl WindowController {
    pub fn new(state_file: PathBuf, state: WindowState) -> Self {
        Self { state, state_file }
    }

    pub fn restore(paths: &AppPaths, provider: &dyn ComicInfoProvider) -> Self {
        let mut state = WindowState::default();
        if state.read_file(&paths.state_file, provider) == LoadSource::Decoded {
            log::debug!("Restored window state from {}", paths.state_file.display());
        }
        Self::new(paths.state_file.clone(), state)
    }

    pub fn state(&self) -> &WindowState {
        &self.state
    }

    pub fn state_file(&self) -> &Path {
        &self.state_file
    }

    pub fn comic_number(&self) -> i32 {
        self.state.comic_number
    }

    pub fn set_comic_number(&mut self, num: i32) {
        self.state.comic_number = num;
    }

    /// Copies live geometry into the state. Size and position are only
    /// taken from a window that is not maximized.
    pub fn state_changed(
        &mut self,
        window: &dyn WindowGeometry,
        properties: Option<&dyn WindowGeometry>,
    ) {
        let state = &mut self.state;
        state.maximized = window.is_maximized();
        if !state.maximized {
            (state.width, state.height) = window.size();
            (state.position_x, state.position_y) = window.position();
        }
        match properties {
            None => state.properties_visible = false,
            Some(dialog) => {
                state.properties_visible = true;
                (state.properties_width, state.properties_height) = dialog.size();
                (state.properties_position_x, state.properties_position_y) = dialog.position();
            }
        }
    }

    pub fn apply_to_window(&self, window: &mut dyn WindowPlacement) {
        let state = &self.state;
        window.resize(state.width, state.height);
        // (0, 0) means no position was ever recorded
        if state.position_x != 0 || state.position_y != 0 {
            window.move_to(state.position_x, state.position_y);
        }
        if state.maximized {
            window.maximize();
        }
    }

    /// Returns whether the properties dialog should be shown.
    pub fn apply_to_properties(&self, dialog: &mut dyn WindowPlacement) -> bool {
        let state = &self.state;
        if !state.properties_visible {
            return false;
        }
        dialog.resize(state.properties_width, state.properties_height);
        dialog.move_to(state.properties_position_x, state.properties_position_y);
        true
    }

    pub fn save_state(&self) -> SaveReport {
        match self.state.write_file(&self.state_file) {
            Ok(()) => SaveReport::Saved(self.state_file.clone()),
            Err(error) => {
                log::warn!("Failed to save window state: {error:?}");
                SaveReport::Failed {
                    path: self.state_file.clone(),
                    error,
                }
            }
        }
    }
}
