pub mod app;
pub mod context;
pub mod sync;
pub mod vm;
pub mod views;

pub use app::App;
pub use context::{AppContext, build_app_context};
