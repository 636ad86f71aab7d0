pub mod format;

pub use format::humanize;
