pub mod api_utils;
pub mod components;
pub mod debounce;
pub mod flash;
pub mod format;
pub mod icons;
pub mod page_data;
pub mod view_state;
