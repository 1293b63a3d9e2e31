mod diff;
mod help;
mod patch;

pub use diff::diff;
pub use help::help;
pub use patch::patch;
