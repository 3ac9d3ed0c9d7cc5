use std::sync::Arc;

use numbot_core::{config::Config, descriptions::DescriptionTable};

#[tokio::main]
async fn main() -> Result<(), numbot_core::Error> {
    numbot_core::logging::init("numbot")?;

    let cfg = Arc::new(Config::load()?);
    let table = Arc::new(DescriptionTable::load(&cfg.descriptions_path));
    if table.is_empty() {
        tracing::warn!(
            path = %cfg.descriptions_path.display(),
            "no descriptions available; birth-date replies will use the fallback text"
        );
    }

    numbot_telegram::router::run(cfg, table)
        .await
        .map_err(|e| numbot_core::Error::External(format!("telegram bot failed: {e}")))?;

    Ok(())
}
