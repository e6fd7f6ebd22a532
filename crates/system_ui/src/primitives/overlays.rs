use super::*;

#[component]
/// Hover tooltip bubble. Visibility is owned by the caller's [`TooltipGate`].
pub fn Tooltip(
    #[prop(into)] text: String,
    #[prop(into)] visible: Signal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let text = store_value(text);
    let class = merge_layout_class("ui-tooltip", layout_class);
    let style = tooltip_style(&use_context::<Theme>().unwrap_or_default());
    view! {
        <Show when=move || visible.get() fallback=|| ()>
            <div
                class=class.clone()
                style=style.clone()
                role="tooltip"
                data-ui-primitive="true"
                data-ui-kind="tooltip"
            >
                {move || text.get_value()}
            </div>
        </Show>
    }
}
