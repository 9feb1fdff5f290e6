pub mod contact;
pub mod home;
pub mod locations;
pub mod not_found;
pub mod shop;
