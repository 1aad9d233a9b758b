// Job enrichment: a regex-only heuristic pass, optionally refined by one
// schema-constrained model call. Any model failure keeps the heuristic result.

pub mod enricher;
pub mod fallback;
pub mod handlers;
pub mod heuristic;
pub mod models;
pub mod prompts;
pub mod rules;
pub mod salary;
pub mod schema;
pub mod skills;

pub use enricher::enrich_job_text;
pub use models::EnrichResult;
