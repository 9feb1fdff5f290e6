pub mod contact_form;
pub mod filter_bar;
pub mod gallery;
pub mod location_card;
pub mod location_detail;
pub mod map_panel;
pub mod membership_cta;
pub mod product_card;
pub mod product_modal;
pub mod toast;
