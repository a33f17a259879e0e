use anyhow::Result;

use mdview_bridge::config::Config;
use mdview_bridge::host::serve;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_args_and_env()?;

    env_logger::Builder::new()
        .parse_filters(&config.log_level)
        .init();

    serve(config).await
}
