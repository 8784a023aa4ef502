pub mod use_clipboard_binding;
pub mod use_copy_to_clipboard;

pub use use_clipboard_binding::use_clipboard_binding;
pub use use_copy_to_clipboard::{use_copy_to_clipboard, UseCopyToClipboard};
