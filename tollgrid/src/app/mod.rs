mod pipeline;
mod pipeline_config;
mod toll_app;
mod toll_operation;

pub use pipeline::run_pipeline;
pub use pipeline_config::PipelineConfig;
pub use toll_app::TollApp;
pub use toll_operation::TollOperation;
