mod object_store;
mod s3_client;

pub use object_store::ObjectStore;
#[cfg(test)]
pub use object_store::testing::MemoryObjectStore;
pub use s3_client::S3ObjectStore;
