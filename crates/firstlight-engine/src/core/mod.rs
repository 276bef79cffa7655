//! Core engine-facing contracts.
//!
//! Defines the interface between the runtime (platform loop) and the tutorial
//! programs, the per-frame context, and the process exit convention.

mod app;
mod ctx;
mod exit;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
pub use exit::{exit_code, finish, FAILURE_EXIT_CODE, SUCCESS_EXIT_CODE};
