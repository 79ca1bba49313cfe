use std::time::Duration;

use leptos::prelude::*;

use crate::toast::Toast;

const TOAST_DURATION: Duration = Duration::from_secs(5);

#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<(u64, Toast)>>,
    next_id: StoredValue<u64>,
}

impl Toaster {
    pub fn push(&self, toast: Toast) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        log::info!("toast: {}", toast.title);
        self.toasts.update(|ts| ts.push((id, toast)));
        let toaster = *self;
        set_timeout(move || toaster.dismiss(id), TOAST_DURATION);
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.try_update(|ts| ts.retain(|(i, _)| *i != id));
    }
}

pub fn provide_toaster() -> Toaster {
    let toaster = Toaster {
        toasts: RwSignal::new(Vec::new()),
        next_id: StoredValue::new(0),
    };
    provide_context(toaster);
    toaster
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

#[component]
pub fn Toasts() -> impl IntoView {
    let toaster = use_toaster();
    view! {
        <ol class="fixed bottom-4 right-4 z-[100] flex flex-col gap-2 w-full max-w-sm">
            <For
                each=move || toaster.toasts.get()
                key=|(id, _)| *id
                children=move |(id, toast)| {
                    let class = if toast.is_destructive() {
                        "toast border-red-500/50 bg-red-900/80 text-red-50"
                    } else {
                        "toast glass border-primary/30 text-foreground"
                    };
                    view! {
                        <li
                            role="status"
                            class=format!(
                                "relative p-4 pr-8 rounded-lg border shadow-lg backdrop-blur-md {class}",
                            )
                        >
                            <div class="font-semibold text-sm">{toast.title}</div>
                            <div class="text-sm opacity-90">{toast.description}</div>
                            <button
                                class="absolute top-2 right-2 opacity-70 hover:opacity-100"
                                aria-label="Close"
                                on:click=move |_| toaster.dismiss(id)
                            >
                                "✕"
                            </button>
                        </li>
                    }
                }
            />
        </ol>
    }
}
