//! Centralized icon catalog and SVG renderer.
//!
//! Views reference icons by semantic [`IconName`] so no component embeds raw SVG. Glyphs are
//! drawn on a 24px grid with a 1.75px stroke.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers used by library views.
pub enum IconName {
    /// Text document.
    DocumentText,
    /// Image / picture.
    Image,
    /// Video clip.
    Video,
    /// Search magnifier.
    Search,
    /// Filter funnel.
    Filter,
    /// Upload arrow.
    ArrowUpload,
}

impl IconName {
    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::DocumentText => "document-text",
            Self::Image => "image",
            Self::Video => "video",
            Self::Search => "search",
            Self::Filter => "filter",
            Self::ArrowUpload => "arrow-upload",
        }
    }

    fn svg_body(self) -> &'static str {
        match self {
            Self::DocumentText => {
                r#"<path d="M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z"/><path d="M14 2v6h6"/><path d="M16 13H8M16 17H8M10 9H8"/>"#
            }
            Self::Image => {
                r#"<rect x="3" y="3" width="18" height="18" rx="2"/><circle cx="9" cy="9" r="2"/><path d="m21 15-3.1-3.1a2 2 0 0 0-2.8 0L6 21"/>"#
            }
            Self::Video => {
                r#"<path d="m16 13 5.2 3.5a.5.5 0 0 0 .8-.4V7.9a.5.5 0 0 0-.8-.4L16 11"/><rect x="2" y="6" width="14" height="12" rx="2"/>"#
            }
            Self::Search => r#"<circle cx="11" cy="11" r="8"/><path d="m21 21-4.3-4.3"/>"#,
            Self::Filter => r#"<path d="M22 3H2l8 9.5V19l4 2v-8.5z"/>"#,
            Self::ArrowUpload => {
                r#"<path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/><path d="m17 8-5-5-5 5"/><path d="M12 3v12"/>"#
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized icon sizes.
pub enum IconSize {
    /// 16px inline icon (buttons, fields).
    #[default]
    Sm,
    /// 20px card-header icon.
    Md,
    /// 64px empty-state illustration.
    Xl,
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Sm => 16,
            Self::Md => 20,
            Self::Xl => 64,
        }
    }

    /// Stable size token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Xl => "xl",
        }
    }
}

#[component]
/// Renders an icon from the centralized catalog.
pub fn Icon(
    /// Semantic icon identifier.
    icon: IconName,
    /// Standardized icon size token.
    #[prop(default = IconSize::Sm)]
    size: IconSize,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class="ui-icon"
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="none"
            stroke="currentColor"
            stroke-width="1.75"
            stroke-linecap="round"
            stroke-linejoin="round"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}
