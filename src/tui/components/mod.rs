//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as props:
//! - `TitleBar`: animated wordmark, target language, status
//! - `ResultPanel`: the three revealed result lines
//! - `LandingPage`: mascot and drifting background glyphs
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `InputBox`: text entry with cursor and horizontal scroll
//! - `LanguagePickerState`: the target-language overlay
//! - `HistoryViewState`: the recall/delete history overlay
//!
//! ## Design Philosophy
//!
//! Components receive external data as "props", not by reaching into
//! global state: dependencies stay explicit and everything renders
//! against a `TestBackend` in tests. Each component file contains its
//! state types, event types, rendering, and tests — read one file to
//! understand one component.

pub mod history_view;
pub mod input_box;
pub mod landing;
pub mod language_picker;
pub mod result_panel;
pub mod title_bar;

pub use history_view::{HistoryEvent, HistoryView, HistoryViewState};
pub use input_box::{InputBox, InputEvent};
pub use landing::LandingPage;
pub use language_picker::{LanguagePicker, LanguagePickerState, PickerEvent};
pub use result_panel::ResultPanel;
pub use title_bar::TitleBar;
