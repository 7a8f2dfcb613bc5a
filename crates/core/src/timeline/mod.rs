//! Timeline widget domain

pub mod frame;
pub mod ports;
pub mod service;

pub use frame::{draw_commands, plan_frame, Frame};
pub use ports::{DowntimeTapListener, RenderSurface};
pub use service::{HorizontalTimeline, RenderReport};
