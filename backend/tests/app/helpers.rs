use backend::conf::{Conf, Env, EnvConf};
use backend::leads::LeadBook;
use backend::startup::Application;
use backend::telemetry;
use once_cell::sync::Lazy;
use reqwest::{RequestBuilder, Response};
use static_routes::*;
use std::path::PathBuf;
use uuid::Uuid;

pub static INDEX_HTML: &str = "<!DOCTYPE html><html><body>landing</body></html>";

static TRACING: Lazy<()> = Lazy::new(|| {
    let subscriber = telemetry::TracingSubscriber::new("testing");

    if std::env::var("TEST_LOG").is_ok() {
        telemetry::init_global_default(subscriber.build(std::io::stdout));
    } else {
        telemetry::init_global_default(subscriber.build(std::io::sink));
    };
});

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let static_dir = std::env::temp_dir().join(format!("landing-dist-{}", Uuid::new_v4()));
    std::fs::create_dir_all(&static_dir).unwrap();
    std::fs::write(static_dir.join("index.html"), INDEX_HTML).unwrap();
    std::fs::write(static_dir.join("tokens.css"), ":root { --space-md: 16px; }").unwrap();

    let env_conf = EnvConf {
        static_dir: static_dir.clone(),
        ..EnvConf::test_default()
    };
    let conf = Conf::new(Env::Local, env_conf);

    let application = Application::build(&conf)
        .await
        .expect("Failed to build application.");

    let address = format!("http://{}:{}", application.host(), application.port());
    let leads = application.leads();
    let _ = tokio::spawn(application.server());

    TestApp {
        address,
        leads,
        static_dir,
        api_client: reqwest::Client::new(),
    }
}

pub struct TestApp {
    pub address: String,
    pub leads: LeadBook,
    pub static_dir: PathBuf,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub fn get(&self, static_path: impl Get) -> RequestBuilder {
        self.api_client
            .get(static_path.get().with_base(&self.address).complete())
    }

    pub fn post(&self, static_path: impl Post) -> RequestBuilder {
        self.api_client
            .post(static_path.post().with_base(&self.address).complete())
    }

    pub fn get_path(&self, path: &str) -> RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    pub async fn post_submit<Body>(&self, body: &Body) -> Response
    where
        Body: serde::Serialize,
    {
        self.post(routes().api.submit)
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.static_dir);
    }
}
