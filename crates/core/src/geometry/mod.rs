//! Pixel geometry: proportional layout, clipping, hit-testing and the
//! retained segment cache

pub mod cache;
pub mod mapper;

pub use cache::SegmentCache;
pub use mapper::{hit_test, layout, SegmentGeometryMapper};
