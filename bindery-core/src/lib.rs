//! Bindery turns the Frith Hilton publishing data into shippable artifacts.
//!
//! The crate covers the two production jobs that used to live in one-off
//! scripts:
//!
//! 1. **Collage**: fetch a catalog of remote cover images and composite them
//!    into a grid banner PNG (`CollageSpec -> GridPlan -> RgbaImage`).
//! 2. **Book**: read a JSON description of a poetry book and assemble it into
//!    a paginated PDF with title page, copyright page, table of contents, one
//!    section per poem, and back matter
//!    (`Book -> DocumentPlan -> PDF`).
//!
//! Both jobs share the same shape: all IO (HTTP fetches, file reads) is
//! front-loaded, a pure planning stage turns the inputs into explicit data
//! (`GridPlan`, `DocumentPlan`), and a final stage renders the plan. Planning
//! is deterministic for a given seed, so outputs are reproducible under test.
//!
//! Per-cover fetch or decode failures are not errors: they are logged and the
//! affected grid cells fall back to a placeholder fill, matching the
//! fire-and-forget nature of the jobs. Hard errors are reserved for unusable
//! inputs (malformed spec JSON, empty grids, missing fonts).
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod book;
mod collage;
mod foundation;

pub use assets::decode::{PreparedImage, decode_image};
pub use assets::fetch::{fetch_covers, load_cover};
pub use book::emit::render_book_pdf;
pub use book::model::{Book, Poem};
pub use book::plan::{DocAlign, DocBlock, DocClass, DocSection, DocumentPlan, compile_document_plan};
pub use book::text::flatten_html;
pub use collage::model::{CollageSpec, FillMode};
pub use collage::plan::{CellSlot, GridGeometry, GridPlan, compile_grid_plan, rng_for_seed};
pub use collage::render::{render_collage, render_grid_plan};
pub use foundation::error::{BinderyError, BinderyResult};
