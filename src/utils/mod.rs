pub mod browser;
pub mod checkout;
pub mod dedup;
pub mod meta_pixel;
pub mod purchase;
