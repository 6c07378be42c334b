//! # taskdeck
//!
//! A terminal task dashboard written in Rust. Taskdeck combines an in-memory
//! task/category data layer with a rich TUI for interactive management and a
//! quick CLI for one-shot queries over the bundled sample dataset.
//!
//! ## Features
//!
//! *   **Filtering & Search**: Combine free-text search, category, status tab
//!     (all/pending/completed/overdue/today) and priority filters.
//! *   **Smart Sorting**: Incomplete tasks always come first; sort by priority,
//!     due date, category or creation time, with a stable tiebreak.
//! *   **Due-Date Labels**: Tasks are classified as overdue, due today, due
//!     tomorrow, due this week or further out, with urgency highlighting.
//! *   **Bulk Editing**: Select visible tasks and complete or delete them in
//!     one confirmed step.
//! *   **Stats**: Completion rate, overdue count and an open-task priority
//!     breakdown, always derived from the live collection.
//!
//! ## Usage
//!
//! ```bash
//! # Interactive dashboard
//! taskdeck
//!
//! # Query the sample dataset
//! taskdeck list --search work --status pending --sort due
//! taskdeck show 3
//! taskdeck stats
//! taskdeck categories
//! ```
//!
//! The data layer is deliberately ephemeral: stores live for the duration of
//! the process and are seeded from a bundled JSON dataset. There is no
//! persistence, networking or multi-user coordination.

pub mod commands;
pub mod due;
pub mod error;
pub mod filter;
pub mod models;
pub mod stats;
pub mod store;
pub mod tui;

pub use error::StoreError;
