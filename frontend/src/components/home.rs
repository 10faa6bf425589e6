use crate::components::imports::*;
use crate::components::{LeadCapture, PageTitle};

#[styled_component]
pub fn Home() -> Html {
    let hero_style = css!(
        "
            display: flex;
            flex-direction: column;
            gap: var(--space-xl);
            padding: var(--space-xl);

            h1 {
                font-family: var(--font-title);
                font-size: 4rem;
                margin: 0;
            }

            p {
                font-family: var(--font-mono);
                max-width: 40em;
            }
        "
    );

    html! {
        <main class={ hero_style }>
            <PageTitle title="Studio"/>
            <h1>{ "We build things people remember." }</h1>
            <p>{ "Brand systems, product sites and the motion between them." }</p>
            <Link<Route> to={Route::Design}>{ "Explore the design system →" }</Link<Route>>
            <LeadCapture/>
        </main>
    }
}
