use desktop_runtime::{use_quick_sliders_config, QuickSlidersConfig, WidgetConfig, WidgetsRoot};
use leptos::*;
use leptos_meta::*;
use platform_host::HostServices;
use system_ui::{Button, ButtonVariant, IconName, LayoutGap, Stack};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Quick Controls" />
        <Meta name="description" content="Quick sliders and themed buttons running in the browser." />

        <main class="site-root">
            <WidgetsRoot
                config=WidgetConfig::default()
                services=HostServices::in_memory(0.7, 0.45, 0.6)
            >
                <ControlsDemo />
            </WidgetsRoot>
        </main>
    }
}

#[component]
/// Buttons that reconfigure the slider panel, one action per pointer button.
pub fn ControlsDemo() -> impl IntoView {
    let Some(config) = use_quick_sliders_config() else {
        tracing::warn!("ControlsDemo rendered outside WidgetsRoot");
        return ().into_view();
    };

    let toggle = move |apply: fn(&mut QuickSlidersConfig)| {
        config.update(|config| apply(config));
    };

    view! {
        <Stack gap=LayoutGap::Sm layout_class="controls-demo" ui_slot="controls-demo">
            <Button
                leading_icon=IconName::Mic
                aria_label="Microphone slider"
                tooltip="Click: microphone slider. Right click: whole panel. Middle click: reset."
                checked=Signal::derive(move || config.get().show_mic)
                on_click=Callback::new(move |_| toggle(|config| config.show_mic = !config.show_mic))
                on_alt_action=Callback::new(move |_| toggle(|config| config.enable = !config.enable))
                on_middle_click=Callback::new(move |_| {
                    toggle(|config| *config = QuickSlidersConfig::default())
                })
            >
                "Mic"
            </Button>
            <Button
                variant=ButtonVariant::Tonal
                leading_icon=IconName::LightMode
                aria_label="Brightness slider"
                tooltip="Show or hide the brightness slider"
                checked=Signal::derive(move || config.get().show_brightness)
                disabled=Signal::derive(move || !config.get().enable)
                on_click=Callback::new(move |_| {
                    toggle(|config| config.show_brightness = !config.show_brightness)
                })
            >
                "Brightness"
            </Button>
        </Stack>
    }
    .into_view()
}
