/// Reusable UI components

use yew::prelude::*;

use crate::listing::DiscussionEntry;

/// Click handler that opens `url` through the host instead of navigating the popup
pub fn open_on_click(on_open: &Callback<String>, url: String) -> Callback<MouseEvent> {
    let on_open = on_open.clone();
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        on_open.emit(url.clone());
    })
}

#[derive(Properties, PartialEq)]
pub struct ExternalLinkProps {
    pub url: String,
    pub on_open: Callback<String>,
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ExternalLink)]
pub fn external_link(props: &ExternalLinkProps) -> Html {
    html! {
        <a
            href={props.url.clone()}
            class={props.class.clone()}
            onclick={open_on_click(&props.on_open, props.url.clone())}
        >
            {props.children.clone()}
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct DiscussionItemProps {
    pub entry: DiscussionEntry,
    pub on_open: Callback<String>,
}

/// One post in the results list; the whole row opens the thread
#[function_component(DiscussionItem)]
pub fn discussion_item(props: &DiscussionItemProps) -> Html {
    let entry = &props.entry;

    html! {
        <li class="discussion-item" onclick={open_on_click(&props.on_open, entry.link.clone())}>
            <span class="discussion-title">{&entry.title}</span>
            <span class="discussion-meta">
                <strong class="accent">{entry.score}</strong>{" points • "}
                <strong class="accent">{entry.num_comments}</strong>{" comments • in "}
                <strong>{format!("r/{}", entry.subreddit)}</strong>
                {format!(" • by u/{} • {}", entry.author, entry.age)}
            </span>
            if let Some(related) = &entry.related_url {
                <span class="discussion-related">
                    {"For related url: "}
                    <span class="monospace">{related}</span>
                </span>
            }
        </li>
    }
}

#[derive(Properties, PartialEq)]
pub struct NoticeProps {
    pub message: String,
    #[prop_or_default]
    pub detail: Option<String>,
    #[prop_or_default]
    pub children: Children,
}

/// A single-row message in place of results
#[function_component(Notice)]
pub fn notice(props: &NoticeProps) -> Html {
    html! {
        <li class="notice-item">
            <p class="message-paragraph">{&props.message}</p>
            if let Some(detail) = &props.detail {
                <pre class="notice-detail">{detail}</pre>
            }
            {props.children.clone()}
        </li>
    }
}
