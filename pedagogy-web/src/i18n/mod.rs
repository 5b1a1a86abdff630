mod bundle;
mod render;

pub use render::{t, tr};
