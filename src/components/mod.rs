pub mod meta_pixel_route_tracker;
pub mod policy_page_layout;
pub mod site_layout;
