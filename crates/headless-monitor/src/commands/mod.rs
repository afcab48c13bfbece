pub mod apply;
pub mod banner;
pub mod console;
pub mod init;
pub mod status;
#[cfg(not(windows))]
pub mod unsupported;
