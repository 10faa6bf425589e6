use crate::primitives::{Get, Post, Url};

#[derive(Default)]
pub struct Routes {
    pub health_check: HealthCheck,
    pub submit: Submit,
}

#[derive(Default)]
pub struct HealthCheck;

impl Url for HealthCheck {
    fn postfix(&self) -> &str {
        "/health_check"
    }

    fn prefix(&self) -> &str {
        "/api"
    }
}

impl Get for HealthCheck {}

// Lead capture form
#[derive(Default)]
pub struct Submit;

impl Url for Submit {
    fn postfix(&self) -> &str {
        "/submit"
    }

    fn prefix(&self) -> &str {
        "/api"
    }
}

impl Post for Submit {}

// only used to assert the method guard
impl Get for Submit {}
