use crate::components::imports::*;

pub struct Error;

#[derive(Properties, PartialEq)]
pub struct ErrorProps {
    pub msg: AttrValue,
    pub code: u32,
}

impl Component for Error {
    type Message = ();
    type Properties = ErrorProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let ErrorProps { msg, code } = ctx.props();
        html! {
            <div class={css!{"font-size: 40px; padding: 40px; color: var(--color-text);"}}>
                <div class={css!{"color:#ff5050;"}}>{ code }</div>
                { msg }
            </div>
        }
    }
}
