pub mod common {
    pub const READ_MORE: &str = "Read Full Article";
    pub const BY_AUTHOR_TEMPLATE: &str = "By {}";
}

pub mod header {
    pub const NAV_HOME: &str = "Home";
    pub const NAV_MAIN_ARIA: &str = "Main navigation";
    pub const OPEN_MENU_ARIA: &str = "Toggle menu";
    pub const SEARCH_PLACEHOLDER: &str = "Search articles...";
    pub const SEARCH_BUTTON: &str = "Search";
    pub const SEARCH_EMPTY: &str = "Please enter a search term";
    pub const SEARCH_NO_RESULTS_TEMPLATE: &str =
        "No articles found for \"{}\". Please try different keywords.";
    pub const TAGLINE: &str = "Your trusted source for regional news";
}

pub mod ticker {
    pub const LABEL: &str = "BREAKING";
    pub const ARIA: &str = "Breaking news";
    pub const NOTIFICATION_TITLE: &str = "Breaking News:";
    pub const NOTIFICATION_CLOSE_ARIA: &str = "Dismiss notification";
}

pub mod filter {
    pub const ARIA: &str = "Filter articles by category";
    pub const ALL: &str = "All";
}

pub mod load_more {
    pub const IDLE: &str = "Load More Articles";
    pub const LOADING: &str = "Loading...";
}

pub mod newsletter {
    pub const TITLE: &str = "Newsletter";
    pub const DESCRIPTION: &str = "Get the latest stories delivered to your inbox.";
    pub const PLACEHOLDER: &str = "Your email address";
    pub const SUBMIT: &str = "Subscribe";
}

pub mod modal {
    pub const CLOSE_ARIA: &str = "Close article";
    pub const SHARE: &str = "📤 Share";
    pub const BOOKMARK: &str = "🔖 Bookmark";
    pub const PRINT: &str = "🖨️ Print";
    pub const LINK_COPIED: &str = "Article link copied to clipboard!";
    pub const BOOKMARKED_TEMPLATE: &str = "\"{}\" has been added to your bookmarks!";
    pub const SEARCH_TITLE_TEMPLATE: &str = "Search Results for \"{}\"";
    pub const SEARCH_COUNT_TEMPLATE: &str = "Found {} article(s)";
    pub const META_TEMPLATE: &str = "By {} | {}";
}

pub mod section_page {
    pub const EMPTY: &str = "No articles in this category yet.";
    pub const SIDEBAR_TITLE: &str = "Features";
}

pub mod scroll_to_top {
    pub const TOOLTIP: &str = "Back to top";
}

pub mod footer {
    pub const COPYRIGHT: &str = "© 2026 EDEN Newspaper. All rights reserved.";
    pub const SECTIONS_ARIA: &str = "Sections";
}

pub mod not_found {
    pub const TITLE: &str = "404 - Page Not Found";
    pub const BODY: &str = "Sorry, the page you are looking for does not exist.";
    pub const BACK_HOME: &str = "Back to the front page";
}
