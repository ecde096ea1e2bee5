// Export of a finished analysis: JSON download and printable HTML.

pub mod document;
pub mod handlers;
pub mod spans;
