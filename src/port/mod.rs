//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!     ┌──────────────┤  pipeline + report      ├──────────────┐
//!     │              └─────────────────────────┘              │
//!     ▼                         ▼                             ▼
//! ┌─────────┐            ┌─────────────┐              ┌────────────┐
//! │  News   │            │   Stores    │              │ Classifier │
//! │ Adapter │            │  (SQLite)   │              │   (LLM)    │
//! └─────────┘            └─────────────┘              └────────────┘
//! ```

pub mod outbound;
