mod async_filter;
mod main_thread;

pub use async_filter::{filter_async, try_filter_async};
pub use main_thread::invoke_on_main_thread;
