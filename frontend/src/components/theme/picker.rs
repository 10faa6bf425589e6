use crate::components::imports::*;

/// One card per theme, the active one highlighted.
#[styled_component]
pub fn ThemePicker() -> Html {
    let design = use_context::<DesignCtx>().expect("Design context does not exist");
    let active = use_state(|| design.themes.get_theme());

    {
        let themes = design.themes.clone();
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                // changes made before this subscription are not replayed
                active.set(themes.get_theme());
                let listener = themes.subscribe(Callback::from(move |change: ThemeChange| {
                    active.set(change.theme)
                }));
                move || drop(listener)
            },
            (),
        );
    }

    let grid_style = css!(
        "
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(10em, 1fr));
            gap: var(--space-md);

            .theme-card {
                padding: var(--space-lg) var(--space-md);
                border: 2px solid transparent;
                border-radius: var(--radius-lg);
                background: var(--color-surface);
                color: var(--color-text);
                font-family: var(--font-title);
                cursor: pointer;
                transition: transform var(--transition-normal);
            }

            .theme-card.active {
                border-color: var(--color-accent);
                transform: scale(1.02);
            }
        "
    );

    let cards = ThemeId::ALL.into_iter().map(|theme| {
        let onclick = {
            let themes = design.themes.clone();
            Callback::from(move |_: MouseEvent| {
                themes.activate(theme, true);
            })
        };
        let class = classes!("theme-card", (theme == *active).then_some("active"));

        html! {
            <button {onclick} {class} data-theme-select={ theme.as_str() }>
                { theme.name() }
            </button>
        }
    });

    html! {
        <div class={ grid_style }>
            { for cards }
        </div>
    }
}
