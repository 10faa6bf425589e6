use crate::components::imports::*;
use crate::components::theme::ThemePicker;
use crate::components::{DesignControls, PageTitle};

#[styled_component]
pub fn DesignPage() -> Html {
    let page_style = css!(
        "
            display: flex;
            flex-direction: column;
            gap: var(--space-xl);
            padding: var(--space-xl);

            h2 {
                font-family: var(--font-title);
            }
        "
    );

    html! {
        <main class={ page_style }>
            <PageTitle title="Design system"/>
            <Link<Route> to={Route::Home}>{ "← Back" }</Link<Route>>
            <section>
                <h2>{ "Themes" }</h2>
                <ThemePicker/>
            </section>
            <section>
                <h2>{ "Tokens" }</h2>
                <DesignControls/>
            </section>
        </main>
    }
}
