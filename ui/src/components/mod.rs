//! Reusable UI components

pub mod chat_message;
pub mod chat_widget;
pub mod contact_form;
pub mod footer;
pub mod header;
pub mod loading;
pub mod mode_toggle;

pub use chat_message::ChatBubble;
pub use chat_widget::ChatWidget;
pub use contact_form::ContactForm;
pub use footer::Footer;
pub use header::{scroll_to_section, Header};
pub use loading::{LoadingDots, LoadingSpinner, TypingIndicator};
pub use mode_toggle::ModeToggle;
