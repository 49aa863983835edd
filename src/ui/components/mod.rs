//! Reusable UI Components
//!
//! - `StatusIndicator` - refresh spinner / hint
//! - `DialogFrame` - bordered overlay frame used by the toast

mod dialog_frame;
mod status_indicator;

pub use dialog_frame::{render_dialog_frame, DialogFrameConfig};
pub use status_indicator::render_refresh_status;
