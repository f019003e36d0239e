mod drive;

pub use drive::{DriveOptions, cmd_drive};
