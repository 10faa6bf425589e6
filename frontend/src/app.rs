use crate::design::DesignSystem;
use crate::router::Route;
use crate::switch::switch;

use yew::prelude::*;
use yew_router::prelude::{BrowserRouter, Switch};

#[function_component(App)]
pub fn app() -> Html {
    use crate::components::theme::ThemeToggle;
    use crate::components::WithDesign;

    // Built once per page load, during the first render so saved settings
    // and the saved theme are on the document before it paints.
    let design = use_memo(
        |_| {
            let design = DesignSystem::browser();
            design.start();
            design
        },
        (),
    );

    html! {
        <WithDesign design={ (*design).clone() }>
            <ThemeToggle/>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </WithDesign>
    }
}
