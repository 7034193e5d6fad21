pub mod admin_service;
pub mod booking_service;
pub mod catbox_service;
pub mod contact_service;
pub mod keep_alive_service;
pub mod portfolio_service;
pub mod telegram_service;
pub mod upload_service;
