use super::*;

#[component]
/// Shared card surface for filter panels, file cards, and empty states.
pub fn Card(
    #[prop(default = Elevation::Raised)] elevation: Elevation,
    #[prop(default = LayoutPadding::Md)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <article
            class=merge_layout_class("ui-card", layout_class)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="card"
            data-ui-slot=ui_slot
            data-ui-elevation=elevation.token()
            data-ui-padding=padding.token()
        >
            {children()}
        </article>
    }
}

#[component]
/// Shared text primitive.
pub fn Text(
    #[prop(default = TextRole::Body)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-text", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-slot=ui_slot
            data-ui-variant=role.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Shared heading primitive.
pub fn Heading(
    #[prop(default = TextRole::Title)] role: TextRole,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] title: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <h2
            class=merge_layout_class("ui-heading", layout_class)
            title=title
            data-ui-primitive="true"
            data-ui-kind="heading"
            data-ui-variant=role.token()
        >
            {children()}
        </h2>
    }
}

#[component]
/// Compact badge. `palette` carries an extra colour class chosen by the caller.
pub fn Badge(
    #[prop(default = TextTone::Secondary)] tone: TextTone,
    #[prop(optional)] outline: bool,
    #[prop(optional, into)] palette: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = match palette {
        Some(palette) if !palette.is_empty() => format!("ui-badge {palette}"),
        _ => "ui-badge".to_string(),
    };
    view! {
        <span
            class=class
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-tone=tone.token()
            data-ui-outline=bool_token(outline)
        >
            {children()}
        </span>
    }
}

#[component]
/// Empty state block: large icon, title, message, then any actions passed as children.
pub fn EmptyState(
    #[prop(default = IconName::DocumentText)] icon: IconName,
    #[prop(into)] title: String,
    #[prop(into)] message: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="ui-empty-state"
            role="status"
            data-ui-primitive="true"
            data-ui-kind="empty-state"
        >
            <Icon icon size=IconSize::Xl />
            <Heading>{title}</Heading>
            <Text tone=TextTone::Secondary ui_slot="message">{move || message.get()}</Text>
            {children()}
        </div>
    }
}
