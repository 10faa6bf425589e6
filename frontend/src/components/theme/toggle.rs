use crate::components::imports::*;

// Circle in the right corner with absolute position, cycles through themes
pub struct ThemeToggle {
    design: DesignCtxSub,
    theme: ThemeId,
    _listener: ThemeListener,
}

pub enum ThemeToggleMsg {
    DesignContextUpdate(DesignCtx),
    ThemeChanged(ThemeChange),
    ToggleTheme,
}

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    #[prop_or_default]
    pub children: Children,
}

impl Component for ThemeToggle {
    type Message = ThemeToggleMsg;
    type Properties = ThemeToggleProps;

    fn create(ctx: &Context<Self>) -> Self {
        let design = DesignCtxSub::subscribe(ctx, Self::Message::DesignContextUpdate);
        let themes = &design.as_ref().themes;
        let _listener = themes.subscribe(ctx.link().callback(Self::Message::ThemeChanged));
        let theme = themes.get_theme();

        Self {
            design,
            theme,
            _listener,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onclick = ctx.link().callback(move |_| Self::Message::ToggleTheme);

        let toggle_style = css!(
            "
                user-select: none;
                position: absolute; right: 15px; top: 15px;
                outline: 5px solid var(--color-text);
                background: var(--color-accent);
                height: 2em; width: 2em;
                border: none;
                border-radius: var(--radius-full, 100%);
                cursor: pointer;
                transition: opacity var(--transition-fast, .2s ease-in);

                :hover {
                    opacity: 0.8;
                }
            "
        );

        let title = format!("Switch to {}", self.theme.next().name());

        html! {
            <button {onclick} {title} aria-label="Cycle theme" class={ toggle_style }/>
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::DesignContextUpdate(design) => {
                self._listener = design
                    .themes
                    .subscribe(ctx.link().callback(Self::Message::ThemeChanged));
                self.theme = design.themes.get_theme();
                self.design.set(design);
                true
            }
            Self::Message::ThemeChanged(change) => {
                self.theme = change.theme;
                true
            }
            Self::Message::ToggleTheme => {
                // rerenders through ThemeChanged
                self.design.as_ref().themes.cycle_theme();
                false
            }
        }
    }
}
