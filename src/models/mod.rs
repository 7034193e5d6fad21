pub mod admin_model;
pub mod booking_model;
pub mod contact_model;
pub mod portfolio_model;
pub mod upload_model;
