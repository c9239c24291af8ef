mod help;
mod record_get;
mod whoami;

pub use help::HelpCommand;
pub use record_get::RecordGet;
pub use whoami::WhoamiCommand;
