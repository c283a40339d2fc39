pub mod u601_apply_mapping;
pub mod u602_excel_cleanup;
pub mod u603_regenerate_gallery_image;
