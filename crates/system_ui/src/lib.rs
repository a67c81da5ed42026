//! Shared UI primitive library for the guard overlay and the site shell.
//!
//! The crate owns reusable Leptos primitives, a centralized icon API, and the stable `data-ui-*`
//! DOM contract consumed by the site CSS layers. Callers should compose these primitives instead
//! of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Button, ButtonSize, ButtonVariant, Card, Elevation, Heading, LayoutAlign, LayoutGap,
    LayoutPadding, Modal, Stack, Text, TextRole, TextTone,
};

/// Convenience imports for crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Button, ButtonSize, ButtonVariant, Card, Elevation, Heading, Icon, IconName, IconSize,
        LayoutAlign, LayoutGap, LayoutPadding, Modal, Stack, Text, TextRole, TextTone,
    };
}
