pub mod prelude;
pub mod stat_blobs;
