pub mod collection;
pub mod fragment;
mod materialize;
pub mod prompting;
