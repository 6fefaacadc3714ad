pub mod cardinal;
pub mod compare;
pub mod decode;
pub mod encode;
pub mod list;
pub mod long;
pub mod sort;
