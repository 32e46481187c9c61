use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct SidebarContext {
    collapsed: RwSignal<bool>,
}

impl SidebarContext {
    pub fn is_collapsed(&self) -> bool {
        self.collapsed.get()
    }

    pub fn toggle(&self) {
        self.collapsed.update(|c| *c = !*c);
    }

    pub fn set_collapsed(&self, value: bool) {
        self.collapsed.set(value);
    }
}

pub fn provide_sidebar() -> SidebarContext {
    let ctx = SidebarContext {
        collapsed: RwSignal::new(false),
    };
    provide_context(ctx);
    ctx
}

/// `None` outside a [`SidebarProvider`]; sidebars then render expanded.
pub fn use_sidebar() -> Option<SidebarContext> {
    use_context::<SidebarContext>()
}

#[component]
pub fn SidebarProvider(children: Children) -> impl IntoView {
    provide_sidebar();
    children()
}
