pub mod export;
pub mod history;
pub mod session;
pub mod settings;
pub mod transcription;

pub use export::*;
pub use history::*;
pub use session::*;
pub use settings::*;
pub use transcription::*;
