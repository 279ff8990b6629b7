//! # Campaign Console
//!
//! Rendering-independent state for the two console screens:
//!
//! - **Campaign management** ([`CampaignListViewModel`]): list, create, edit,
//!   toggle status, and two-step delete. Every successful write is followed
//!   by a full reload; the server is the only source of truth.
//! - **Message generator** ([`MessageGeneratorViewModel`]): a profile draft
//!   submitted to the generation endpoint, with a locally editable result.
//!
//! State lives in `tokio::sync::watch` channels so a renderer can subscribe
//! and redraw on change. Notifications go to a shared [`ToastCenter`].

pub mod app;
pub mod campaign_list;
pub mod clipboard;
pub mod error;
pub mod logging;
pub mod message_generator;
pub mod toast;

pub use app::{Console, Tab};
pub use campaign_list::{CampaignForm, CampaignListState, CampaignListViewModel, ListView};
pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard, SystemClipboard};
pub use error::ConsoleError;
pub use message_generator::{GeneratorState, GeneratorView, MessageGeneratorViewModel};
pub use toast::{Toast, ToastCenter, ToastConfig, ToastPosition};
