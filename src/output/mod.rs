pub mod formatter;

pub use formatter::EntryFormatter;
