//! CLI command implementations.

mod apply;
mod check_update;
mod completions;
mod list;
mod show;
mod status;
mod update;

pub use apply::{run_apply_resolution, run_apply_sensor};
pub use check_update::run_check_update;
pub use completions::run_completions;
pub use list::{run_formats, run_manufacturers, run_models};
pub use show::run_show;
pub use status::run_status;
pub use update::run_update;
