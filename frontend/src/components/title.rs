use crate::components::imports::*;

// drawbacks:
//      evaluation order matters, and it's top to down
//      so set title only from page components
pub struct PageTitle;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: AttrValue,
}

impl Component for PageTitle {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match web_sys::window().and_then(|window| window.document()) {
            Some(document) => document.set_title(&ctx.props().title),
            None => tracing::debug!("no document to set the title on"),
        }
        html! {}
    }
}
