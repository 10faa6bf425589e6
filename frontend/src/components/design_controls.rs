use crate::components::imports::*;

/// Option groups for every design setting plus a reset button.
#[styled_component]
pub fn DesignControls() -> Html {
    let design = use_context::<DesignCtx>().expect("Design context does not exist");
    // The token store is the source of truth; bumping this rerenders from it.
    let revision = use_state(|| 0_u32);

    let refresh = {
        let revision = revision.clone();
        move || revision.set(*revision + 1)
    };

    let controls_style = css!(
        "
            display: flex;
            flex-direction: column;
            gap: var(--space-lg);

            .control-label {
                font-family: var(--font-title);
                margin-bottom: var(--space-sm);
            }

            .toggle-options {
                display: flex;
                flex-wrap: wrap;
                gap: var(--space-sm);
            }

            .toggle-option {
                padding: var(--space-xs) var(--space-md);
                border: 1px solid var(--color-text);
                border-radius: var(--radius-full);
                background: transparent;
                color: var(--color-text);
                font-family: var(--font-mono);
                cursor: pointer;
                transition: background var(--transition-fast);
            }

            .toggle-option.active {
                background: var(--color-accent);
                border-color: var(--color-accent);
            }
        "
    );

    let groups = SettingKey::ALL.into_iter().map(|key| {
        let current = design.tokens.get(key);

        let options = key.setting().names().map(|value| {
            let onclick = {
                let tokens = design.tokens.clone();
                let refresh = refresh.clone();
                Callback::from(move |_: MouseEvent| {
                    tokens.set(key, value);
                    refresh();
                })
            };
            let class = classes!("toggle-option", (current == value).then_some("active"));

            html! {
                <button {onclick} {class} data-value={ value }>{ value }</button>
            }
        });

        html! {
            <div class="control">
                <div class="control-label">{ key.label() }</div>
                <div class="toggle-options" data-control={ key.as_str() }>
                    { for options }
                </div>
            </div>
        }
    });

    let onreset = {
        let tokens = design.tokens.clone();
        let refresh = refresh.clone();
        Callback::from(move |_: MouseEvent| {
            tokens.reset();
            refresh();
        })
    };

    html! {
        <div class={ controls_style }>
            { for groups }
            <button id="reset-all" class="toggle-option" onclick={ onreset }>{ "Reset all" }</button>
        </div>
    }
}
