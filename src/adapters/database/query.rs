//! The export query
//!
//! The text is kept verbatim, filter literals included, so the exported rows
//! match what the query has always selected. It is plain SQL that runs
//! unchanged on MySQL and PostgreSQL.

/// Generator type whose configurations are eligible for export
pub const GENERATOR_TYPE: &str = "MCQ Math";

/// Generator configuration version eligible for export
pub const GENERATOR_VERSION: &str = "0.2";

/// Status of rows that are exported
pub const ACTIVE_STATUS: &str = "active";

/// Selects `id`, `standard` and `content` of active generated content for
/// the configured generator, ordered by standard
pub const GENERATED_CONTENT_QUERY: &str = "SELECT cgc.id, s.external_id AS standard, cgc.content 
FROM content_gen_generated_content cgc
JOIN standards s ON cgc.standard_id = s.id
WHERE cgc.content_generator_config_id IN (
  SELECT id FROM content_gen_content_generator_configs
  WHERE content_generator_type = 'MCQ Math' AND version_number = '0.2'
)
AND cgc.status = 'active'
ORDER BY standard;";
