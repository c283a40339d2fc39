pub mod response;

pub use response::RegenerateImageResponse;

use crate::usecases::common::UseCaseMetadata;

pub struct RegenerateGalleryImage;

impl UseCaseMetadata for RegenerateGalleryImage {
    fn usecase_index() -> &'static str {
        "u603"
    }

    fn usecase_name() -> &'static str {
        "regenerate_gallery_image"
    }

    fn display_name() -> &'static str {
        "Regenerate gallery image"
    }

    fn description() -> &'static str {
        "Rebuild the web-sized derivative of a gallery image"
    }
}
