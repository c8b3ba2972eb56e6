mod journeys_app;
mod journeys_app_error;
mod operation;
mod postprocess;

pub use journeys_app::JourneysApp;
pub use journeys_app_error::JourneysAppError;
pub use operation::JourneysOperation;
pub use postprocess::{resolve_period, run_postprocess, PostprocessArguments};
