//! Core library for outloud: hierarchical outline numbering and segmentation
//! of structured documents into named, ordered narration tracks.
//!
//! The engine makes two passes over one materialized paragraph stream:
//! [`outline::DepthWidths::measure`] first learns how many digits each
//! outline level needs, so generated names sort identically as strings and
//! as numbers, then [`outline::OutlineCounter`] walks the stream again while
//! [`segment::segment_document`] cuts it into contiguous segments and hands
//! each one to a [`segment::TrackSink`] export backend.

#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod error;
pub mod export;
pub mod formats;
pub mod input;
pub mod outline;
pub mod paragraph;
pub mod sanitize;
pub mod segment;
