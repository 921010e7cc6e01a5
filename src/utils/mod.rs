pub mod files;
pub mod qr;
