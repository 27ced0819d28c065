//! Shared UI primitive library for the content library views.
//!
//! The crate owns reusable Leptos primitives, a centralized icon API, and the stable `data-ui-*`
//! DOM contract consumed by the site stylesheet. Views should compose these primitives instead
//! of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Badge, Button, ButtonSize, ButtonVariant, Card, Cluster, Elevation, EmptyState, FieldVariant,
    Grid, Heading, LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding, SelectField, Stack, Text,
    TextField, TextRole, TextTone,
};

/// Convenience imports for application crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Badge, Button, ButtonSize, ButtonVariant, Card, Cluster, Elevation, EmptyState,
        FieldVariant, Grid, Heading, Icon, IconName, IconSize, LayoutAlign, LayoutGap,
        LayoutJustify, LayoutPadding, SelectField, Stack, Text, TextField, TextRole, TextTone,
    };
}
