/// Popup UI for What Reddit Says

use yew::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use log::{error, info, warn};
use patternfly_yew::prelude::*;
use crate::config::SiteConfig;
use crate::error::LookupError;
use crate::listing::{PopupContext, PopupView, render_failure, render_outcome};
use crate::search::fetch_discussions;
use crate::tab_data::{ExtensionInfo, TabInfo};
use crate::ui::components::{DiscussionItem, ExternalLink, Notice, open_on_click};

// Import JS bridge functions
#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getActiveTab() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn openTab(url: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    fn getManifest() -> Result<JsValue, JsValue>;
}

#[function_component(App)]
pub fn app() -> Html {
    let view = use_state(|| PopupView::Idle);
    let context = use_state(|| None::<PopupContext>);
    let extension = use_state(ExtensionInfo::default);

    // Read the manifest and start the lookup once, on mount
    {
        let view = view.clone();
        let context = context.clone();
        let extension = extension.clone();

        use_effect_with((), move |_| {
            match read_manifest() {
                Ok(info) => extension.set(info),
                Err(e) => warn!("Could not read manifest: {}", e),
            }

            spawn_local(async move {
                let ctx = match get_active_tab()
                    .await
                    .and_then(|tab| PopupContext::prepare(tab, SiteConfig::default()))
                {
                    Ok(ctx) => ctx,
                    Err(e) => {
                        info!("Not looking up this tab: {}", e);
                        view.set(render_failure(e));
                        return;
                    }
                };

                context.set(Some(ctx.clone()));
                view.set(PopupView::Loading);

                let outcome = fetch_discussions(&ctx.config, &ctx.canonical_url).await;
                if let Err(e) = &outcome {
                    error!("Lookup for {} failed: {}", ctx.canonical_url, e);
                }
                view.set(render_outcome(&ctx, outcome, js_sys::Date::now()));
            });
            || ()
        });
    }

    let on_open = Callback::from(|url: String| open_in_new_tab(url));

    html! {
        <div class="popup">
            <header class="popup-header">
                <h1 class="popup-title">{"What Reddit Says"}</h1>
                if let Some(ctx) = &*context {
                    <p class="url-label" title={ctx.canonical_url.clone()}>{&ctx.canonical_url}</p>
                }
            </header>

            <ul class="content">
                {match &*view {
                    PopupView::Idle => html! {},
                    PopupView::Loading => html! {
                        <li class="loading-text-center">
                            <Spinner />
                            <p class="loading-text">{"Asking Reddit..."}</p>
                        </li>
                    },
                    PopupView::Discussions { entries, see_all } => html! {
                        <>
                            {for entries.iter().map(|entry| html! {
                                <DiscussionItem entry={entry.clone()} on_open={on_open.clone()} />
                            })}
                            if let Some(action) = see_all {
                                <li class="see-all">
                                    <Button
                                        variant={ButtonVariant::Link}
                                        onclick={open_on_click(&on_open, action.url.clone())}
                                    >
                                        {action.label.clone()}
                                    </Button>
                                </li>
                            }
                        </>
                    },
                    PopupView::NoDiscussions { submit } => html! {
                        <Notice message={"No results for this url."}>
                            <Button
                                variant={ButtonVariant::Primary}
                                onclick={open_on_click(&on_open, submit.url.clone())}
                            >
                                {submit.label.clone()}
                            </Button>
                        </Notice>
                    },
                    PopupView::Failed { message } => html! {
                        <li class="message-top-margin">
                            <Alert r#type={AlertType::Danger} title={"Sorry, something went wrong with the Reddit API call:"} inline={true}>
                                <pre class="notice-detail">{message.clone()}</pre>
                            </Alert>
                        </li>
                    },
                    PopupView::InvalidUrl { url } => html! {
                        <Notice message={"Sorry, not a valid url:"} detail={Some(url.clone())} />
                    },
                }}
            </ul>

            <footer class="footer-popup">
                <span class="version-label">{format!("Ver. {}", extension.version)}</span>
                if let Some(homepage) = &extension.homepage_url {
                    <ExternalLink url={homepage.clone()} on_open={on_open.clone()} class="about-link">
                        {"About"}
                    </ExternalLink>
                }
            </footer>
        </div>
    }
}

// Helper functions

async fn get_active_tab() -> Result<TabInfo, LookupError> {
    let tab_js = getActiveTab()
        .await
        .map_err(|e| LookupError::Host(format!("Failed to query active tab: {:?}", e)))?;

    serde_wasm_bindgen::from_value(tab_js)
        .map_err(|e| LookupError::Host(format!("Failed to parse tab: {:?}", e)))
}

fn read_manifest() -> Result<ExtensionInfo, LookupError> {
    let manifest_js = getManifest()
        .map_err(|e| LookupError::Host(format!("Failed to get manifest: {:?}", e)))?;

    serde_wasm_bindgen::from_value(manifest_js)
        .map_err(|e| LookupError::Host(format!("Failed to parse manifest: {:?}", e)))
}

fn open_in_new_tab(url: String) {
    spawn_local(async move {
        if let Err(e) = openTab(&url).await {
            warn!("Failed to open {}: {:?}", url, e);
        }
    });
}
