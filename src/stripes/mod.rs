// 條紋背景主模組

mod command;
mod controller;
mod host;
mod range;
mod theme;

pub use command::StripeCommand;
pub use controller::{StripeEvent, StripeState, Striper};
pub use host::{
    DecorationSink, StripeHost, StripeLayers, ThemeSource, ViewId, ViewSnapshot, ViewSource,
};
pub use range::{covering_range, padded_range, striped_lines, LineRange, STRIPE_PADDING};
pub use theme::{StripeColor, ThemeBucket, ThemeKind};
