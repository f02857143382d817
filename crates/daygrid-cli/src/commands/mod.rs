pub mod event;
pub mod export;
pub mod month;
pub mod search;
