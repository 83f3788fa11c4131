//! Upload Use Cases

mod store_upload;

pub use store_upload::{StoreUploadUseCase, UploadLimits};
