//! # Card Core
//!
//! Card composition logic for the `cardcraft` greeting card maker.
//! Holds no I/O: hosts feed it discrete events and the current time.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                  card-core                  │
//! ├─────────────────────────────────────────────┤
//! │  Card Model      │  Screens                 │
//! │  - CardData      │  - Splash / Home         │
//! │  - Palette/fonts │  - Composer              │
//! │  - Decorations   │  - Preview               │
//! ├─────────────────────────────────────────────┤
//! │  Navigator       │  App Driver              │
//! │  - Screen stack  │  - Event routing         │
//! │  - Typed edges   │  - Guarded timers        │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Flow
//!
//! ```text
//! Splash ──(3s, replace)──▶ Home ──(create, 2s)──▶ CardMaker ──(confirm, 2s)──▶ Preview
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod card;
pub mod composer;
pub mod error;
pub mod event;
pub mod navigation;
pub mod picker;
pub mod preview;
pub mod screens;
pub mod timer;

pub use app::{AppConfig, CardApp};
pub use card::{
    BackgroundColor, CardData, Decoration, FontFamily, FontSize, ImageFormat, ImageRef,
    LocalImage, TextStyle,
};
pub use composer::{Alert, Composer};
pub use error::{CardError, CardResult};
pub use event::UiEvent;
pub use navigation::{Navigator, Route, Screen, ScreenEntry, ScreenId, Transition};
pub use picker::{ImagePicker, PickError, PickOutcome, PickRequest};
pub use preview::{CardView, PreviewScreen};
pub use screens::{BusyIndicator, HomeScreen, SplashScreen, StaticAsset};
pub use timer::{PendingTimer, TimerQueue};

/// Card core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
