pub mod admin_user;
pub mod booked_date;
pub mod contact_submission;
pub mod portfolio_item;
