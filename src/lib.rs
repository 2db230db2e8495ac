//! fragment-gen: scaffold fragments and fragment collections in a project tree.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    CollectionOptions, CollectionTarget, FragmentOptions, create_collection,
    create_collection_with, create_fragment, create_fragment_with, list_collections,
};
pub use app::commands::collection::CollectionOutcome;
pub use app::commands::fragment::DispatchOutcome;
pub use domain::{AppError, slugify};
