mod main_thread;

pub use main_thread::{MainThreadDispatcher, MainThreadInvoker, MainThreadLoop};
