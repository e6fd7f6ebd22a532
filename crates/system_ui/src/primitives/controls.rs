use super::*;

fn run_timer_command(
    command: TimerCommand,
    gate: RwSignal<TooltipGate>,
    timer: StoredValue<Option<TimeoutHandle>>,
) {
    match command {
        TimerCommand::Start {
            delay_ms,
            generation,
        } => {
            let scheduled = set_timeout_with_handle(
                move || {
                    gate.update(|gate| {
                        gate.timer_fired(generation);
                    })
                },
                Duration::from_millis(delay_ms),
            );
            match scheduled {
                Ok(handle) => timer.set_value(Some(handle)),
                Err(err) => tracing::warn!(?err, "tooltip timer could not be scheduled"),
            }
        }
        TimerCommand::Cancel => {
            if let Some(handle) = timer.get_value() {
                handle.clear();
            }
            timer.set_value(None);
        }
        TimerCommand::None => {}
    }
}

#[component]
/// Themed button primitive.
///
/// Colors follow [`ButtonColors::resolve`] for the live enabled/checked/hovered/pressed state.
/// Left, right, and middle clicks run `on_click`, `on_alt_action`, and `on_middle_click`
/// respectively. When `tooltip` is set it appears after the theme's hover delay and hides as
/// soon as the pointer leaves.
pub fn Button(
    #[prop(default = ButtonVariant::Standard)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] tooltip: Option<String>,
    #[prop(optional)] tooltip_delay_ms: Option<u64>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] checked: MaybeSignal<bool>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] on_click: Option<Callback<()>>,
    #[prop(optional)] on_alt_action: Option<Callback<()>>,
    #[prop(optional)] on_middle_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let theme = use_context::<Theme>().unwrap_or_default();
    let colors = ButtonColors::from_palette(&theme.palette, variant);
    let delay_ms = tooltip_delay_ms.unwrap_or(theme.tokens.tooltip_delay_ms);

    let hovered = create_rw_signal(false);
    let pressed = create_rw_signal(false);
    let gate = create_rw_signal(TooltipGate::new(delay_ms));
    let timer = store_value(None::<TimeoutHandle>);
    let has_tooltip = tooltip.is_some();

    let state = Signal::derive(move || ButtonState {
        enabled: !disabled.get(),
        checked: checked.get(),
        hovered: hovered.get(),
        pressed: pressed.get(),
    });
    let color_pair = Signal::derive(move || colors.resolve(state.get()));

    let mut actions = ButtonActions::new();
    if let Some(on_click) = on_click {
        actions = actions.with_click(move || on_click.call(()));
    }
    if let Some(on_alt_action) = on_alt_action {
        actions = actions.with_alt_action(move || on_alt_action.call(()));
    }
    if let Some(on_middle_click) = on_middle_click {
        actions = actions.with_middle_click(move || on_middle_click.call(()));
    }
    let actions = store_value(actions);
    let dispatch = move |button: PointerButton| {
        let enabled = !disabled.get_untracked();
        actions.with_value(|actions| actions.dispatch(enabled, button));
    };

    on_cleanup(move || {
        if let Some(handle) = timer.try_get_value().flatten() {
            handle.clear();
        }
    });

    view! {
        <button
            type="button"
            class=merge_layout_class("ui-button", layout_class)
            aria-label=move || aria_label.get()
            aria-pressed=move || bool_token(checked.get())
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-state=move || state.get().token()
            style=move || button_style(&theme, color_pair.get())
            on:mouseenter=move |_| {
                hovered.set(true);
                if has_tooltip {
                    let mut command = TimerCommand::None;
                    gate.update(|gate| command = gate.hover_start(unix_time_ms_now()));
                    run_timer_command(command, gate, timer);
                }
            }
            on:mouseleave=move |_| {
                hovered.set(false);
                pressed.set(false);
                let mut command = TimerCommand::None;
                gate.update(|gate| command = gate.hover_end());
                run_timer_command(command, gate, timer);
            }
            on:mousedown=move |ev: MouseEvent| {
                let presses = PointerButton::from_dom_button(ev.button())
                    .is_some_and(PointerButton::shows_pressed);
                if presses && !disabled.get_untracked() {
                    pressed.set(true);
                }
            }
            on:mouseup=move |_: MouseEvent| pressed.set(false)
            on:click=move |_| dispatch(PointerButton::Primary)
            on:auxclick=move |ev: MouseEvent| {
                match PointerButton::from_dom_button(ev.button()) {
                    Some(PointerButton::Primary) | None => {}
                    Some(button) => dispatch(button),
                }
            }
            on:contextmenu=move |ev: MouseEvent| {
                pressed.set(false);
                if actions.with_value(|actions| actions.has(ButtonAction::AltAction)) {
                    ev.prevent_default();
                }
            }
        >
            {leading_icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
            {children()}
            {tooltip
                .map(|text| {
                    view! {
                        <Tooltip text visible=Signal::derive(move || gate.get().should_show()) />
                    }
                })}
        </button>
    }
}

#[component]
/// Horizontal level slider with an icon that rides onto the handle near full.
///
/// `config` supplies the icon, the value in `[0, 1]`, and the drag handler. A config without a
/// handler renders a disabled input, so the thumb cannot move away from the reported value.
pub fn QuickSlider(
    #[prop(into)] config: Signal<SliderConfig>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    let theme = use_context::<Theme>().unwrap_or_default();
    let container_style = slider_style(&theme);
    let icon = config.with_untracked(|config| config.icon);
    let value = Signal::derive(move || config.with(|config| config.value));
    let inert =
        Signal::derive(move || disabled.get() || !config.with(SliderConfig::is_interactive));
    let overlay = Signal::derive(move || config.with(SliderConfig::overlay));

    view! {
        <div
            class=merge_layout_class("ui-quick-slider", layout_class)
            style=container_style
            data-ui-primitive="true"
            data-ui-kind="quick-slider"
            data-ui-slot=ui_slot
            data-ui-overlay=move || overlay.get().anchor.token()
            data-ui-state=move || if inert.get() { "disabled" } else { "enabled" }
        >
            <input
                class="ui-field"
                type="range"
                min="0"
                max="1"
                step="0.01"
                aria-label=aria_label
                disabled=move || inert.get()
                prop:value=move || format!("{:.2}", value.get())
                data-ui-kind="range"
                data-ui-percent=move || format!("{:.2}", clamp_level(value.get()) * 100.0)
                on:input=move |ev| {
                    if inert.get_untracked() {
                        return;
                    }
                    if let Ok(parsed) = event_target_value(&ev).parse::<f64>() {
                        config.get_untracked().drag(parsed);
                    }
                }
            />
            <span
                class="ui-quick-slider-icon"
                style=move || slider_icon_style(&theme, overlay.get(), value.get())
            >
                <Icon icon size=IconSize::Lg />
            </span>
        </div>
    }
}
