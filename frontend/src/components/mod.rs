pub mod article_body;
pub mod article_card;
pub mod article_modal;
pub mod category_filter;
pub mod footer;
pub mod header;
pub mod load_more;
pub mod newsletter;
pub mod reading_progress;
pub mod scroll_to_top_button;
pub mod section_feed;
pub mod ticker;
pub mod ticker_notification;
