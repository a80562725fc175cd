pub mod pipeline;
pub mod validator;

pub use pipeline::{enrich, drop_unlocated, EnrichmentPipeline, EnrichmentResult, EnrichmentStats};
pub use validator::{InputValidator, ValidationResult, ValidationStats};
