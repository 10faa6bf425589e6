use crate::primitives::{Get, Url};

#[derive(Default)]
pub struct Routes {
    pub home: Home,
    pub design: Design,
}

#[derive(Default)]
pub struct Home;

impl Url for Home {
    fn postfix(&self) -> &str {
        "/"
    }
}

impl Get for Home {}

#[derive(Default)]
pub struct Design;

impl Url for Design {
    fn postfix(&self) -> &str {
        "/design"
    }
}

impl Get for Design {}
