use content_library::ContentLibraryApp;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use serde_json::{Map, Value};

/// Query keys accepted by the library route, mapped onto launch-param fields.
const QUERY_LAUNCH_KEYS: [(&str, &str); 3] =
    [("q", "search"), ("subject", "subject"), ("type", "file_type")];

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Content Library" />
        <Meta name="description" content="Browse uploaded educational content." />

        <Router>
            <main class="site-root" data-host=platform_host_web::host_strategy_name()>
                <Routes>
                    <Route path="" view=UploadRoute />
                    <Route path="/content" view=ContentRoute />
                </Routes>
            </main>
        </Router>
    }
}

/// Builds library launch params from URL query pairs, e.g. `?q=cell&subject=science&type=image`.
pub fn launch_params_from_query<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Value {
    let mut params = Map::new();
    for (key, value) in pairs {
        if let Some((_, field)) = QUERY_LAUNCH_KEYS.iter().find(|(query, _)| *query == key) {
            params.insert((*field).to_string(), Value::String(value.to_string()));
        }
    }
    Value::Object(params)
}

#[component]
pub fn ContentRoute() -> impl IntoView {
    let query = use_query_map();
    let launch_params = query.with_untracked(|map| {
        launch_params_from_query(
            QUERY_LAUNCH_KEYS
                .iter()
                .filter_map(|(key, _)| map.get(*key).map(|value| (*key, value.as_str()))),
        )
    });
    let navigate = use_navigate();
    let on_upload = Callback::new(move |()| navigate("/", Default::default()));

    view! { <ContentLibraryApp launch_params on_upload /> }
}

#[component]
fn UploadRoute() -> impl IntoView {
    view! {
        <section class="canonical-content canonical-upload">
            <h1>"Upload"</h1>
            <p>"The upload flow is served separately. Uploaded files appear in the library."</p>
            <A href="/content">"Open Content Library"</A>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn query_pairs_map_onto_launch_fields() {
        assert_eq!(
            launch_params_from_query([("q", "cell"), ("type", "image"), ("page", "2")]),
            json!({"search": "cell", "file_type": "image"})
        );
        assert_eq!(launch_params_from_query([]), json!({}));
    }
}
