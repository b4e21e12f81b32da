/// Plano system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of sections in a teaching plan. The checklist always has this many entries.
pub const SECTION_COUNT: usize = 12;

/// Minimum trimmed length for the long narrative sections
/// (syllabus, objectives, justification, methodology).
pub const NARRATIVE_MIN_CHARS: usize = 30;

/// Minimum trimmed length for the short text fields
/// (resources, basic bibliography, extension summary/objectives).
pub const SHORT_TEXT_MIN_CHARS: usize = 10;

/// Minimum trimmed length for name fields (course name, professor name).
pub const NAME_MIN_CHARS: usize = 3;

/// Default staleness window for the owner-scoped plan cache (seconds).
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;
