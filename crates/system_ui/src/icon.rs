//! Centralized icon API rendering inline SVG glyphs.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Named icons available to shared primitives.
pub enum IconName {
    /// Circled "i" information glyph.
    Info,
    /// Arrow leaving a box, used for external navigation.
    ExternalLink,
}

impl IconName {
    /// Returns the stable token written to `data-ui-icon`.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::ExternalLink => "external-link",
        }
    }

    fn path(self) -> &'static str {
        match self {
            Self::Info => "M18 10a8 8 0 11-16 0 8 8 0 0116 0zm-7-4a1 1 0 11-2 0 1 1 0 012 0zM9 9a1 1 0 000 2v3a1 1 0 001 1h1a1 1 0 100-2v-3a1 1 0 00-1-1H9z",
            Self::ExternalLink => "M11 3a1 1 0 100 2h2.586l-6.293 6.293a1 1 0 101.414 1.414L15 6.414V9a1 1 0 102 0V4a1 1 0 00-1-1h-5zM5 5a2 2 0 00-2 2v8a2 2 0 002 2h8a2 2 0 002-2v-3a1 1 0 10-2 0v3H5V7h3a1 1 0 000-2H5z",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Icon size tokens.
pub enum IconSize {
    /// Inline/button icon.
    Sm,
    /// Default icon.
    #[default]
    Md,
    /// Hero icon for dialogs and empty states.
    Lg,
}

impl IconSize {
    const fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    const fn pixels(self) -> u32 {
        match self {
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 32,
        }
    }
}

#[component]
/// Decorative icon glyph. Icons are hidden from assistive technology; pair them with text.
pub fn Icon(icon: IconName, #[prop(default = IconSize::Md)] size: IconSize) -> impl IntoView {
    let pixels = size.pixels();
    view! {
        <svg
            class="ui-icon"
            width=pixels
            height=pixels
            viewBox="0 0 20 20"
            fill="currentColor"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=icon.token()
            data-ui-size=size.token()
        >
            <path fill-rule="evenodd" clip-rule="evenodd" d=icon.path()></path>
        </svg>
    }
}
