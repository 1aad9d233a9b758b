// Job import: derives company/role/location from a posting page and pasted text.
// Parsers never fail; undetected fields are None and surface as warnings after merge.

pub mod fetch;
pub mod handlers;
pub mod html;
pub mod job_text;
pub mod location;
pub mod merge;
pub mod models;
pub mod patterns;
pub mod text;

pub use html::parse_job_html;
pub use job_text::parse_job_text;
pub use merge::merge_import_fields;
pub use models::ImportFields;
