fn main() {
    frontend::telemetry::init(tracing::Level::DEBUG);
    yew::Renderer::<frontend::app::App>::new().render();
}
