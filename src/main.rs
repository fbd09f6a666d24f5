use message_board::api;
use message_board::common::init;
use message_board::settings::AppSettings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = AppSettings::load_from_env()?;
    init::initialize_logging(&settings);
    api::serve(settings).await
}
