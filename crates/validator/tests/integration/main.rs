//! Integration tests for the rule catalog and pipelines.

mod composites;
mod formats;
mod primitives;
