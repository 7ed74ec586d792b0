use anyhow::{anyhow, Result};
use serde_json::json;

use crate::session::{self, Claims};
use crate::state;

/// Mint a session token for an account, bypassing the password check.
/// Development tool only; the secret still has to match the server's.
pub async fn handle(username: &str, json_output: bool) -> Result<()> {
    let app_state = state::from_global_config()?;

    let user = app_state
        .directory
        .get(username)
        .ok_or_else(|| anyhow!("unknown user '{}'", username))?;

    let claims = Claims::for_user(user);
    let token = session::issue_token(&claims)?;

    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "token": token,
                "username": user.username,
                "role": user.role,
            }))?
        );
    } else {
        println!("{}", token);
    }

    Ok(())
}
