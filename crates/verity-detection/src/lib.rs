//! # verity-detection
//!
//! Rule detectors that run before any knowledge or network lookup. Each one
//! returns `Some(verdict)` when it applies and `None` otherwise; the fusion
//! cascade tries them in priority order.

pub mod absurd;
pub mod controversial;

pub use absurd::check_absurd;
pub use controversial::check_controversial;
