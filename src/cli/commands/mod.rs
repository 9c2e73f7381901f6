//! One handler per subcommand. Each returns the process exit status and
//! prints its own output.

pub mod apply;
pub mod capture;
pub mod classify;
pub mod export;
pub mod helper;
pub mod ignore;
pub mod import;
pub mod init;
pub mod translate;
