pub mod detail_overlay;
pub mod filter_bar;
pub mod gallery_grid;
pub mod others_panel;
pub mod protected_image;
