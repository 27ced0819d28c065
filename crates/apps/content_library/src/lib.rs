//! Content library app: browse uploaded educational files with search, subject, and type
//! filters.
//!
//! The full list is read once at mount from the host key-value store; the filtered list and the
//! subject choices are derived from it and the current [`FilterCriteria`].

pub mod catalog;
pub mod filter;
pub mod launch;
pub mod loader;
pub mod presenter;

use leptos::*;
use platform_host::FileRecord;
use serde_json::Value;
use system_ui::prelude::*;

pub use catalog::{subject_catalog, subject_options, FILE_TYPE_OPTIONS};
pub use filter::{filter_records, FilterCriteria, ALL_FILTER};
pub use launch::ContentLibraryLaunch;
pub use loader::{load_library_now, load_library_with, records_or_empty};
pub use presenter::{
    display_label, file_type_icon, format_upload_date, format_upload_date_in, results_summary,
    subject_color_class, FileCardModel, ResultsView,
};

#[component]
/// The content library view.
///
/// `on_upload` hands off to the upload flow. `on_view_file` receives the clicked record; hosts
/// that have no file-detail view leave it unset and the button does nothing.
pub fn ContentLibraryApp(
    #[prop(optional)] launch_params: Value,
    #[prop(optional)] on_upload: Option<Callback<()>>,
    #[prop(optional)] on_view_file: Option<Callback<FileRecord>>,
) -> impl IntoView {
    let initial = ContentLibraryLaunch::from_value(&launch_params).initial_criteria();
    let files = store_value(load_library_now());
    let total = files.with_value(Vec::len);
    let subject_choices = files.with_value(|files| subject_options(files));

    let criteria = create_rw_signal(initial);
    let filtered =
        create_memo(move |_| criteria.with(|c| files.with_value(|files| filter_records(files, c))));
    let results_view = create_memo(move |_| ResultsView::select(total, filtered.with(Vec::len)));

    let upload = Callback::new(move |_: ev::MouseEvent| {
        if let Some(on_upload) = on_upload {
            on_upload.call(());
        }
    });

    view! {
        <div class="content-library" data-app="content-library">
            <Stack gap=LayoutGap::Lg padding=LayoutPadding::Lg>
                <Cluster justify=LayoutJustify::Between ui_slot="header">
                    <Stack gap=LayoutGap::Sm>
                        <Heading role=TextRole::Display>"Content Library"</Heading>
                        <Text tone=TextTone::Secondary>
                            "Browse and manage your uploaded educational content"
                        </Text>
                    </Stack>
                    <Button leading_icon=IconName::ArrowUpload on_click=upload>
                        "Upload New Content"
                    </Button>
                </Cluster>

                <FiltersPanel criteria subject_choices />

                <Text tone=TextTone::Secondary ui_slot="summary">
                    {move || results_summary(filtered.with(Vec::len), total)}
                </Text>

                {move || match results_view.get() {
                    ResultsView::Cards => view! {
                        <Grid columns=3 gap=LayoutGap::Lg role="list" aria_label="Uploaded files">
                            <For
                                each=move || filtered.get()
                                key=|record| record.id.clone()
                                children=move |record| view! { <FileCard record on_view_file /> }
                            />
                        </Grid>
                    }
                    .into_view(),
                    empty => view! {
                        <Card padding=LayoutPadding::Lg>
                            <EmptyState
                                title="No Content Found"
                                message=empty.message().unwrap_or_default().to_string()
                            >
                                <Button leading_icon=IconName::ArrowUpload on_click=upload>
                                    "Upload Content"
                                </Button>
                            </EmptyState>
                        </Card>
                    }
                    .into_view(),
                }}
            </Stack>
        </div>
    }
}

#[component]
fn FiltersPanel(
    criteria: RwSignal<FilterCriteria>,
    subject_choices: Vec<(String, String)>,
) -> impl IntoView {
    let search_term = Signal::derive(move || criteria.with(|c| c.search_term.clone()));
    let subject = Signal::derive(move || criteria.with(|c| c.selected_subject.clone()));
    let file_type = Signal::derive(move || criteria.with(|c| c.selected_file_type.clone()));

    view! {
        <Card aria_label="Filters and search">
            <Stack gap=LayoutGap::Md>
                <Cluster gap=LayoutGap::Sm>
                    <Icon icon=IconName::Filter size=IconSize::Md />
                    <Heading>"Filters & Search"</Heading>
                </Cluster>
                <Grid columns=4 gap=LayoutGap::Md ui_slot="filters">
                    <TextField
                        leading_icon=IconName::Search
                        placeholder="Search files..."
                        aria_label="Search files"
                        value=search_term
                        on_input=Callback::new(move |ev| {
                            let value = event_target_value(&ev);
                            criteria.update(|c| c.search_term = value);
                        })
                    />
                    <SelectField
                        aria_label="Filter by subject"
                        value=subject
                        on_change=Callback::new(move |ev| {
                            let value = event_target_value(&ev);
                            criteria.update(|c| c.selected_subject = value);
                        })
                    >
                        {subject_choices
                            .into_iter()
                            .map(|(value, label)| {
                                let tag = value.clone();
                                view! {
                                    <option
                                        value=value
                                        selected=move || subject.with(|s| *s == tag)
                                    >
                                        {label}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </SelectField>
                    <SelectField
                        aria_label="Filter by file type"
                        value=file_type
                        on_change=Callback::new(move |ev| {
                            let value = event_target_value(&ev);
                            criteria.update(|c| c.selected_file_type = value);
                        })
                    >
                        {FILE_TYPE_OPTIONS
                            .iter()
                            .map(|&(value, label)| view! {
                                <option
                                    value=value
                                    selected=move || file_type.with(|t| t == value)
                                >
                                    {label}
                                </option>
                            })
                            .collect_view()}
                    </SelectField>
                    <Button
                        variant=ButtonVariant::Outline
                        disabled=Signal::derive(move || criteria.with(FilterCriteria::is_default))
                        on_click=Callback::new(move |_| criteria.update(FilterCriteria::clear))
                    >
                        "Clear Filters"
                    </Button>
                </Grid>
            </Stack>
        </Card>
    }
}

#[component]
fn FileCard(record: FileRecord, on_view_file: Option<Callback<FileRecord>>) -> impl IntoView {
    let card = FileCardModel::from_record(&record);
    let view_file = Callback::new(move |_: ev::MouseEvent| {
        if let Some(on_view_file) = on_view_file {
            on_view_file.call(record.clone());
        }
    });

    view! {
        <div role="listitem">
            <Card elevation=Elevation::Hover layout_class="library-file-card">
                <Stack gap=LayoutGap::Sm>
                    <Cluster gap=LayoutGap::Sm ui_slot="card-title">
                        <Icon icon=card.icon size=IconSize::Md />
                        <Heading layout_class="library-file-name" title=card.file_name.clone()>
                            {card.file_name}
                        </Heading>
                    </Cluster>
                    <Badge palette=card.subject_color>{card.subject_label}</Badge>
                    <dl class="library-file-meta">
                        <dt>"File Type:"</dt>
                        <dd>{card.file_type_label}</dd>
                        <dt>"Uploaded:"</dt>
                        <dd>{card.uploaded}</dd>
                        <dt>"Status:"</dt>
                        <dd>
                            <Badge tone=TextTone::Success outline=true>{card.status}</Badge>
                        </dd>
                    </dl>
                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Sm
                        layout_class="library-view-file"
                        on_click=view_file
                    >
                        "View File"
                    </Button>
                </Stack>
            </Card>
        </div>
    }
}
