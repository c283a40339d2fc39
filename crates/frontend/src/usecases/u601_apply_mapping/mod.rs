pub mod api;
pub mod view;
pub mod wizard;

pub use view::ApplyMappingView;
