pub mod cart;
pub mod checkout;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod quotes;
pub mod service_detail;
pub mod services;
