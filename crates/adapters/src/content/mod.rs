mod builtin;
mod json;

pub use builtin::BuiltinContent;
pub use json::JsonContentFile;
