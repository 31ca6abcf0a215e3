pub mod action_link;
pub mod breadcrumb;
pub mod countdown;
pub mod data_table;
pub mod empty_state;
pub mod gallery;
pub mod lazy_image;
pub mod loading;
pub mod pico;
pub mod rating;
pub mod stepper;
pub mod toast;
pub mod upload;
pub mod validate;
