#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod fetch;
pub mod rate_limit;
pub mod releases;
pub mod render;
pub mod runner;
pub mod summary;

pub use config::{ConfigError, NoteSettings, RadarConfig, Source};
pub use fetch::{FetchError, ReleaseFetcher};
pub use rate_limit::{check_core_rate_limit, report_core_rate_limit, RateLimitInfo};
pub use releases::{
    normalize, normalize_all, CanonicalRelease, NormalizeError, RawAsset, RawAuthor, RawRelease,
    ReleaseType,
};
pub use render::{ChatPayload, ChatRenderer, NoteDocument, NoteRenderer, RenderError};
pub use runner::{RunReport, Runner, RunnerConfig, RunnerError};
pub use summary::{aggregate, is_recent, Aggregator, ReleaseSummary, SourceSummary};
