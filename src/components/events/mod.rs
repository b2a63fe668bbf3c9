pub mod models;
pub mod output;
mod service;

pub use models::{EventChanges, NewEvent, OutputOptions};
pub use output::{render_output, OutputField, OutputProperty};
pub use service::{merge_changes, EventService};
