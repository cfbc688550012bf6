pub mod chat;
pub mod compose;
pub mod extract;
pub mod gateway;
pub mod http_client;
pub mod intent;
pub mod season;
pub mod stats;
