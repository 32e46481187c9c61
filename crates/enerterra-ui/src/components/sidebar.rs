use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::context::{use_auth, use_sidebar};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SidebarLink {
    pub href: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const PROPIETARIO_LINKS: &[SidebarLink] = &[
    SidebarLink {
        href: "/propietario",
        label: "Mi panel",
        icon: "\u{25A3}",
    },
    SidebarLink {
        href: "/contacto",
        label: "Contacto",
        icon: "\u{2709}",
    },
];

pub const PROMOTOR_LINKS: &[SidebarLink] = &[
    SidebarLink {
        href: "/promotor/proyectos",
        label: "Proyectos",
        icon: "\u{26A1}",
    },
    SidebarLink {
        href: "/contacto",
        label: "Contacto",
        icon: "\u{2709}",
    },
];

/// Role area sidebar. Inside a `SidebarProvider` it gains a collapse toggle.
#[component]
pub fn Sidebar(title: &'static str, links: &'static [SidebarLink]) -> impl IntoView {
    let sidebar = use_sidebar();
    let auth = use_auth();
    let location = use_location();

    let navClass = move || {
        if sidebar.is_some_and(|s| s.is_collapsed()) {
            "nav-sidebar collapsed"
        } else {
            "nav-sidebar"
        }
    };

    let userName = move || {
        auth.get()
            .user
            .map(|u| u.nombre)
            .unwrap_or_else(|| "Invitado".to_string())
    };

    view! {
        <nav class=navClass>
            <div class="nav-brand">
                <div class="brand-icon">"E"</div>
                <span class="brand-text">{title}</span>
                {sidebar
                    .map(|s| {
                        view! {
                            <button class="nav-toggle" on:click=move |_| s.toggle()>
                                "\u{2630}"
                            </button>
                        }
                    })}
            </div>
            <ul class="nav-links">
                {links
                    .iter()
                    .map(|link| {
                        let href = link.href;
                        let pathname = location.pathname;
                        let itemClass = move || {
                            if pathname.get() == href { "nav-item active" } else { "nav-item" }
                        };
                        view! {
                            <li class=itemClass>
                                <a href=href>
                                    <span class="nav-icon">{link.icon}</span>
                                    <span class="nav-label">{link.label}</span>
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class="nav-footer">{userName}</div>
        </nav>
    }
}
