pub mod builtin;
pub mod decode;
pub mod font;
