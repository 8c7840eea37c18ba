//! # TimeTally Core Library
//!
//! This library provides the core business logic for TimeTally, a tool that
//! turns pasted time-range text into tallied durations and a tiered points
//! score. It implements a CLI-first philosophy where all operations are
//! available via a standalone CLI binary, with any richer front end being a
//! thin presentation layer over the same core library.
//!
//! ## Pipeline
//!
//! Raw multi-line text flows through:
//!
//! 1. **Normalizer** (optional): cleans list markers, rewrites loosely
//!    formatted ranges into canonical `HH:MM - HH:MM` form
//! 2. **Parser**: one line becomes one [`TimeRangeEntry`], valid or carrying
//!    a typed [`ParseErrorKind`]
//! 3. **Session**: ordered entry list with an O(n) total and entry removal
//! 4. **Points scorer** (on demand): tiered score over the total duration
//! 5. **Template renderer** (on demand): `{{placeholder}}` substitution into
//!    a user-owned template string
//!
//! ## Key Components
//!
//! - [`Session`]: entry list, total duration, explicit points recomputation
//! - [`normalize`]: five-mode text cleanup
//! - [`render`]: template substitution with unknown-placeholder tracking
//! - [`TemplateStore`]: single-slot persistence for the template string

pub mod error;
pub mod normalize;
pub mod parse;
pub mod points;
pub mod session;
pub mod storage;
pub mod template;

pub use error::StorageError;
pub use normalize::{normalize, NormalizeMode};
pub use parse::{parse_line, parse_text, ParseErrorKind, TimeRangeEntry};
pub use points::{score, PointsBreakdown, PointsTerm};
pub use session::{Session, TotalDuration};
pub use storage::{FileTemplateStore, TemplateStore, DEFAULT_TEMPLATE};
pub use template::{render, RenderedTemplate, TemplateVars};
