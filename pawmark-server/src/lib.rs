pub mod body;
pub mod http;
