pub mod comic;
pub mod geometry;
pub mod paths;
pub mod settings;
pub mod state_store;
pub mod window;

pub use comic::{ComicInfo, ComicInfoProvider, XkcdClient};
pub use geometry::{WindowGeometry, WindowPlacement};
pub use state_store::{LoadSource, WindowState};
pub use window::{SaveReport, WindowController};
