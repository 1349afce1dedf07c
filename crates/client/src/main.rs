//! `sysconsole-probe`: checks that a backend is reachable and the configured
//! credentials work.

use anyhow::Context;
use sysconsole_client::ConsoleClient;
use sysconsole_client::model::auth::LoginParams;

const ENV_USERNAME: &str = "SYSCONSOLE_USERNAME";
const ENV_PASSWORD: &str = "SYSCONSOLE_PASSWORD";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    sysconsole_observability::init();

    let client = ConsoleClient::from_env().context("invalid client configuration")?;

    match (std::env::var(ENV_USERNAME), std::env::var(ENV_PASSWORD)) {
        (Ok(username), Ok(password)) => {
            let tokens = client
                .login(&LoginParams::new(username.as_str(), password))
                .await
                .with_context(|| format!("login as {username} failed"))?;
            client.set_access_token(Some(tokens.access_token));
            tracing::info!(%username, "logged in");
        }
        _ if client.access_token().is_none() => {
            tracing::warn!("no credentials configured; authenticated calls will be rejected");
        }
        _ => {}
    }

    let version = client.get_version().await.context("fetching version")?;
    tracing::info!(
        version = %version.version_num,
        released = %version.release_time,
        relogin = version.requires_relogin(),
        "backend version"
    );

    let user = client.get_user_info().await.context("fetching current user")?;
    tracing::info!(
        user_id = %user.user_id,
        user_name = %user.user_name,
        roles = ?user.roles,
        buttons = user.buttons.len(),
        "current user"
    );

    Ok(())
}
