pub use super::stat_blobs::Entity as StatBlobs;
