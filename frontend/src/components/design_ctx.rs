// Hands the application's DesignSystem down the component tree.
//
// The stores mutate themselves (storage, document root), so the context value
// never changes after mount; components that render theme state subscribe to
// the ThemeSwitch instead of waiting for a context update.

use crate::components::imports::*;

pub type DesignCtx = DesignSystem;

pub struct WithDesign;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub design: DesignSystem,
    #[prop_or_default]
    pub children: Children,
}

impl Component for WithDesign {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <ContextProvider<DesignCtx> context={ ctx.props().design.clone() }>
                { ctx.props().children.clone() }
            </ContextProvider<DesignCtx>>
        }
    }
}

pub struct DesignCtxSub {
    ctx: DesignCtx,
    // keeps the component subscribed to context replacement
    _ctx_handle: ContextHandle<DesignCtx>,
}

impl AsRef<DesignSystem> for DesignCtxSub {
    fn as_ref(&self) -> &DesignSystem {
        &self.ctx
    }
}

impl DesignCtxSub {
    pub fn subscribe<COMP, F, M>(ctx: &Context<COMP>, f: F) -> Self
    where
        COMP: Component,
        M: Into<COMP::Message>,
        F: Fn(DesignCtx) -> M + 'static,
    {
        let (ctx, _ctx_handle) = ctx
            .link()
            .context(ctx.link().callback(f))
            .expect("Design context does not exist");

        Self { ctx, _ctx_handle }
    }

    pub fn set(&mut self, ctx: DesignCtx) {
        self.ctx = ctx;
    }
}
