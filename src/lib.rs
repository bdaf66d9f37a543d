//! Shapeshift: captures the clipboard, classifies it into typed items, builds
//! a renderable control on the main thread and offers actions against it.

pub mod bootstrap;
