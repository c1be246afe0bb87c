pub mod config;
pub mod logging;

pub mod extract;
pub mod http;
pub mod pipeline;
pub mod retry;
pub mod storage;
pub mod url_model;

pub use config::FormsConfig;
pub use pipeline::{run, PipelineError, PipelineEvent, Reporter, RunOutcome, RunReport};
