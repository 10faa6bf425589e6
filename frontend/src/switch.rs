use crate::router::Route;

use yew::prelude::*;

pub fn switch(routes: Route) -> Html {
    use crate::components::*;

    match routes {
        Route::Home => html! { <Home/> },
        Route::Design => html! { <DesignPage/> },
        Route::NotFound => html! { <Error code={404} msg="not found"/> },
    }
}
