mod attachment_service;

pub use attachment_service::{
    object_key, sign_display_path, upload_batch, AttachmentService, UploadImage,
};
