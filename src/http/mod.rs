pub mod pattern;
pub mod request;
pub mod router;
