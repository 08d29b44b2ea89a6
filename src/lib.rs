pub mod app;
pub mod dates;
pub mod details;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod selection;
pub mod state;
pub mod stats;
pub mod storage;
pub mod store;
pub mod ui;
pub mod views;
pub mod window;

pub use app::router;
pub use state::{AppState, Dashboard};
pub use storage::{resolve_data_dir, DataSources};
