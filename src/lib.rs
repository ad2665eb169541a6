//! panelkit — Box-model rendering, proportional layout and keypress dispatch
//! for full-screen terminal UIs.
//!
//! A UI is a tree of [`Component`]s. Each component renders itself into
//! exactly the `width x height` it is given: margin, border and padding
//! around content supplied either by a [`Layout`] (which splits its space
//! between children by weight) or by a leaf [`Widget`]. Keys travel down the
//! same tree through the three-stage [`Dispatch`] chain, and the
//! [`KeyResult`] that comes back tells the [`Application`] whether to redraw.
//!
//! Module map:
//! - `types`: closed sets of colors, text attributes and keys
//! - `text`: style-preserving `Line`/`Fragment` with wrap, fit and truncate
//! - `sizing`, `border`: box-model primitives
//! - `component`, `layout`, `widgets`: the component tree
//! - `dispatch`, `index`: keypress protocol and focus tracking
//! - `screen`, `application`: screen registry and run loop
//! - `escape`, `terminal`: conversion to escape sequences and the backend seam
//! - `config`, `error`: ambient configuration and error types

pub mod application;
pub mod border;
pub mod component;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod escape;
pub mod index;
pub mod layout;
pub mod screen;
pub mod sizing;
pub mod terminal;
pub mod text;
mod text_utils;
pub mod types;
pub mod widgets;

pub use application::Application;
pub use border::Border;
pub use component::{BoxStyle, Component, ComponentKind, Widget};
pub use config::AppConfig;
pub use dispatch::{Deferred, Dispatch, KeyResult};
pub use error::{Error, Result};
pub use index::FocusList;
pub use layout::{weighted, Axis, Layout};
pub use screen::{Screen, SimpleScreen};
pub use sizing::Sizing;
pub use terminal::{CrosstermBackend, HeadlessBackend, TerminalBackend, TerminalInput};
pub use text::{Fragment, Line, Style};
pub use types::{Capabilities, Color, Key};
pub use widgets::TextView;
