//! Supporting services for the API handlers.

pub mod camera;
pub mod upload;

pub use camera::camera_name_from_description;
pub use upload::{
    drain_field, generate_clip_filename, mime_for_extension, stage_field, StagedClip,
    UploadSettings,
};
