pub mod build;
pub mod classbasket;
pub mod fmt;
pub mod info;
pub mod test;
