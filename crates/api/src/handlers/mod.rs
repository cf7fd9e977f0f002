pub mod assignment;
pub mod export;
pub mod mission;
pub mod ninja;
pub mod pages;
