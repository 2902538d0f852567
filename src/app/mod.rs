// Presentation side: input handling, text rendering, quotes and exports.

pub mod export;
pub mod presenter;
pub mod quotes;
pub mod session;
