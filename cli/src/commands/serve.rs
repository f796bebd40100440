use testbed_common::{config::Config, info};
use testbed_core::api::{FORMS_PATH, REDIRECT_PATH};
use testbed_core::server::{self, ServerConfig};

use crate::terminal::print;

pub async fn serve(server_cfg: ServerConfig, cfg: &Config) -> anyhow::Result<()> {
    let listener = server::bind(&server_cfg).await?;

    if !cfg.is_quiet() {
        print::print_status(format!("Endpoints: {FORMS_PATH}, {REDIRECT_PATH}"));
        print::print_status("Press Ctrl+C to stop");
    }

    tokio::select! {
        result = server::serve(listener) => result?,
        _ = tokio::signal::ctrl_c() => info!("Shutting down"),
    }

    print::end_of_program(cfg.quiet);
    Ok(())
}
