//! Single-series visual core for a hosting analytics application.
//!
//! The host hands the visual a columnar data view on every update cycle. This
//! crate turns that view into an ordered list of presentation records, each
//! with a resolved display color and an opaque selection identity, and hands
//! those records back to the host's property pane through the object
//! enumeration protocol so per-category colors can be edited and persisted.
//! Rendering is the host page's concern; this crate only owns the data.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`visual`] | Stateful [`visual::VisualCore`]: update cycle and record cache |
//! | [`builder`] | Record builder: data view to [`builder::DataPoint`]s |
//! | [`bridge`] | Property bridge: object enumeration dispatch table |
//! | [`data_view`] | Host data view types and the per-row override lookup |
//! | [`host`] | Collaborator traits (palette, identity, selection ids) |
//! | [`palette`] | Default theme palette with memoized per-key colors |
//! | [`selection`] | Default category selection ids and their selectors |
//! | [`settings`] | Visual-level settings parsed from data view metadata |
//! | [`error`] | Error type for the update cycle |
//! | [`wasm`] | `wasm-bindgen` wrapper exchanging JSON with the host page |
//! | [`consts`] | Shared object/property names and default colors |

pub mod bridge;
pub mod builder;
pub mod consts;
pub mod data_view;
pub mod error;
pub mod host;
pub mod palette;
pub mod selection;
pub mod settings;
pub mod visual;
pub mod wasm;
