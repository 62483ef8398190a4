pub mod blob_repository;

pub use blob_repository::BlobRepository;
