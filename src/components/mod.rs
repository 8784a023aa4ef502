pub mod copy_to_clipboard;
pub mod icons;

pub use copy_to_clipboard::{CopyToClipboard, CopyToClipboardProps};
pub use icons::{AlertTriangleIcon, CheckIcon, CopyIcon};
