pub mod mapping;
pub mod request;
pub mod response;

pub use mapping::{collect_mappings, expand_assignments, CollectError, UnmappedProduct, UserMapping};
pub use request::{ApplyMappingRequest, AssignmentData, MappingAssignment, ProductHandling};
pub use response::{ApplyMappingOutcome, ApplyMappingResponse};

use crate::usecases::common::UseCaseMetadata;

pub struct ApplyMapping;

impl UseCaseMetadata for ApplyMapping {
    fn usecase_index() -> &'static str {
        "u601"
    }

    fn usecase_name() -> &'static str {
        "apply_mapping"
    }

    fn display_name() -> &'static str {
        "Apply image mapping"
    }

    fn description() -> &'static str {
        "Assign an image filename to every catalog row that has none"
    }
}
