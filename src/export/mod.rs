pub mod doc;
pub mod srt;
pub mod txt;

pub use self::doc::export_to_doc;
pub use srt::export_to_srt;
pub use txt::export_to_txt;
