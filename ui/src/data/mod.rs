//! Loading the dataset: where documents live, how they are fetched, and how
//! they become a [`Catalog`](crate::core::catalog::Catalog).

pub mod documents;

mod error;
pub use error::LoadError;

mod layout;
pub use layout::DataLayout;

mod source;
#[cfg(not(target_arch = "wasm32"))]
pub use source::DirSource;
pub use source::{DataSource, DocumentSource, HttpSource};

mod loader;
pub use loader::load_catalog;
