use backend::conf::{Conf, Env, EnvConf};
use backend::startup::Application;
use backend::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = Env::derive();
    let conf = Conf::new(env, EnvConf::derive(env)?);

    let subscriber = telemetry::TracingSubscriber::new("site")
        .pretty(conf.log.pretty)
        .build(std::io::stdout);
    telemetry::init_global_default(subscriber);

    tracing::info!("environment: {}", conf.env);

    let application = Application::build(&conf).await?;
    application.server().await?;
    Ok(())
}
