//! # Mobile Assets
//!
//! Turns a directory of source PNGs into the density-specific image sets
//! Android and iOS projects consume. One source fans out into five Android
//! drawable buckets and three iOS scales, each rendered at
//! `logical size × density multiplier` with proportional padding.
//!
//! # Pipeline
//!
//! ```text
//! generate   input dir  →  sources            (scan: *.png, optionally recursive)
//!   └─ platform emitter  source → buckets     (Android: 5 dirs, iOS: 3 files + Contents.json)
//!        └─ resize       bucket → file        (geometry + codec, or a plain copy)
//! ```
//!
//! Each layer turns failures of the layer below into a `bool` and an
//! [`events::AssetEvent`], so one bad image never aborts the rest of a batch.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | `LogicalSize`, `FitPolicy`, `ResizeTarget` |
//! | [`density`] | Android density buckets and iOS scales |
//! | [`imaging`] | Geometry, the codec backend trait, the single-image resizer |
//! | [`platform`] | Android and iOS emitters, `Contents.json` |
//! | [`scan`] | Source discovery |
//! | [`generate`] | Batch run over an input directory |
//! | [`events`] | Diagnostics and the `Reporter` sink |
//! | [`output`] | Event formatting and the `tracing` reporter |
//! | [`config`] | `mobile-assets.toml` loading and validation |
//!
//! # Design Decisions
//!
//! ## Backend Behind a Trait
//!
//! Everything above [`imaging::ImageBackend`] only computes sizes and paths.
//! Tests drive the emitters and the batch run with a recording backend and
//! check exact canvas sizes without decoding a pixel; the production
//! [`imaging::RustBackend`] is pure Rust (`image` crate, Lanczos3, PNG).
//!
//! ## Identity Copies
//!
//! A variant whose size equals the source and has no padding is copied byte
//! for byte instead of re-encoded. With no target size this is always the
//! highest density bucket, so the source itself ships unchanged.

pub mod config;
pub mod density;
pub mod events;
pub mod generate;
pub mod imaging;
pub mod output;
pub mod platform;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
