use roaring_flame_core::IconKind;
use yew::prelude::*;

type IconRenderer = fn(u32) -> Html;

/// Indexed by `IconKind::index`.
const STAGE_ICONS: [IconRenderer; IconKind::COUNT] = [
    flame_icon,
    skull_icon,
    warning_icon,
    cross_icon,
    terminal_mark,
];

pub(crate) fn stage_icon(kind: IconKind, size: u32) -> Html {
    STAGE_ICONS[kind.index()](size)
}

fn outline(size: u32, class: &'static str, body: Html) -> Html {
    html! {
        <svg
            class={classes!("icon", class)}
            width={size.to_string()}
            height={size.to_string()}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {body}
        </svg>
    }
}

pub(crate) fn flame_icon(size: u32) -> Html {
    outline(
        size,
        "icon-flame",
        html! {
            <path d="M8.5 14.5A2.5 2.5 0 0 0 11 12c0-1.38-.5-2-1-3-1.072-2.143-.224-4.054 2-6 .5 2.5 2 4.9 4 6.5 2 1.6 3 3.5 3 5.5a7 7 0 1 1-14 0c0-1.153.433-2.294 1-3a2.5 2.5 0 0 0 2.5 2.5z" />
        },
    )
}

fn skull_icon(size: u32) -> Html {
    outline(
        size,
        "icon-skull",
        html! {
            <>
                <circle cx="9" cy="12" r="1" />
                <circle cx="15" cy="12" r="1" />
                <path d="M8 20v2h8v-2" />
                <path d="m12.5 17-.5-1-.5 1h1z" />
                <path d="M16 20a2 2 0 0 0 1.56-3.25 8 8 0 1 0-11.12 0A2 2 0 0 0 8 20" />
            </>
        },
    )
}

fn warning_icon(size: u32) -> Html {
    outline(
        size,
        "icon-warning",
        html! {
            <>
                <path d="m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3Z" />
                <path d="M12 9v4" />
                <path d="M12 17h.01" />
            </>
        },
    )
}

fn cross_icon(size: u32) -> Html {
    outline(
        size,
        "icon-cross",
        html! {
            <path d="M11 2a2 2 0 0 0-2 2v5H4a2 2 0 0 0-2 2v2c0 1.1.9 2 2 2h5v5c0 1.1.9 2 2 2h2a2 2 0 0 0 2-2v-5h5a2 2 0 0 0 2-2v-2a2 2 0 0 0-2-2h-5V4a2 2 0 0 0-2-2h-2z" />
        },
    )
}

fn terminal_mark(_size: u32) -> Html {
    html! { <span class="icon-terminal">{ "End" }</span> }
}

pub(crate) fn book_icon(size: u32) -> Html {
    outline(
        size,
        "icon-book",
        html! {
            <>
                <path d="M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z" />
                <path d="M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z" />
            </>
        },
    )
}
