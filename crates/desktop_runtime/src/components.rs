//! Leptos views over [`QuickSlidersPanel`].

use leptos::*;
use platform_host::HostServices;
use system_ui::{LayoutGap, LayoutPadding, QuickSlider, SliderConfig, SliderKind, Stack};

use crate::config::{QuickSlidersConfig, WidgetConfig};
use crate::quick_sliders::{QuickSlidersPanel, SliderBinding};

#[component]
/// Mounts the widgets described by `config` and shares its theme with every primitive below.
///
/// The `[quick_sliders]` section is exposed through context as an
/// `RwSignal<QuickSlidersConfig>`, so hosts can toggle sliders at runtime. `children` render
/// after the panel inside the same context.
pub fn WidgetsRoot(
    config: WidgetConfig,
    services: HostServices,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    provide_context(config.theme());
    let quick_sliders = create_rw_signal(config.quick_sliders);
    provide_context(quick_sliders);

    view! {
        <div class="quick-controls-root" data-ui-kind="widgets-root">
            <QuickSlidersView config=quick_sliders services />
            {children.map(|children| children())}
        </div>
    }
}

/// Runtime handle for toggling quick sliders under a [`WidgetsRoot`].
pub fn use_quick_sliders_config() -> Option<RwSignal<QuickSlidersConfig>> {
    use_context::<RwSignal<QuickSlidersConfig>>()
}

#[component]
/// Vertical stack of the sliders `config` enables, each bound to its host service.
///
/// Changing `config` mounts and unmounts only the kinds that changed; surviving sliders keep
/// their subscription.
pub fn QuickSlidersView(
    #[prop(into)] config: Signal<QuickSlidersConfig>,
    services: HostServices,
) -> impl IntoView {
    let panel = store_value(QuickSlidersPanel::new(&config.get_untracked(), services));
    let mounted = create_rw_signal(panel.with_value(QuickSlidersPanel::mounted_kinds));

    create_effect(move |_| {
        let next = config.get();
        let changed = panel
            .try_update_value(|panel| !panel.apply_config(&next).is_empty())
            .unwrap_or(false);
        if changed {
            mounted.set(panel.with_value(QuickSlidersPanel::mounted_kinds));
        }
    });

    view! {
        <Show when=move || !mounted.get().is_empty() fallback=|| ()>
            <Stack
                gap=LayoutGap::Sm
                padding=LayoutPadding::Sm
                layout_class="quick-sliders"
                ui_slot="quick-sliders"
            >
                <For
                    each=move || mounted.get()
                    key=|kind| *kind
                    children=move |kind| view! { <BoundSlider kind panel /> }
                />
            </Stack>
        </Show>
    }
}

#[component]
fn BoundSlider(kind: SliderKind, panel: StoredValue<QuickSlidersPanel>) -> impl IntoView {
    let changed = create_trigger();
    let watch_id = panel.with_value(|panel| {
        panel
            .slider(kind)
            .map(|slider| slider.watch(move |_| changed.notify()))
    });

    on_cleanup(move || {
        let Some(id) = watch_id else {
            return;
        };
        panel.try_with_value(|panel| {
            if let Some(slider) = panel.slider(kind) {
                slider.unwatch(id);
            }
        });
    });

    let config = Signal::derive(move || {
        changed.track();
        panel
            .try_with_value(|panel| panel.slider(kind).map(SliderBinding::config))
            .flatten()
            .unwrap_or_else(|| SliderConfig::new(kind.icon(), 0.0))
    });

    view! {
        <QuickSlider config aria_label=kind.label() ui_slot=kind.token() />
    }
}
