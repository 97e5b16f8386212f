mod session;
mod settings;
mod subject;
mod task;

pub use session::SessionCommands;
pub use settings::SettingsCommands;
pub use subject::SubjectCommands;
pub use task::TaskCommands;
