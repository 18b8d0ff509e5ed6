pub mod cards;
pub mod http_client;
pub mod picks_fetch;
pub mod ranking;
pub mod sample_feed;
pub mod state;
