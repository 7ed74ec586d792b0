use anyhow::{anyhow, Result};
use serde_json::json;

use crate::authz::{self, GuardOutcome, Role, RoleFlags};

/// Evaluate the route guard exactly as the server would for a navigation
/// into `path` by a session holding `role`.
pub async fn handle(role: &str, path: &str, json_output: bool) -> Result<()> {
    let tag = (role != "anonymous").then_some(role);
    let flags = RoleFlags::resolve(tag);

    let required = area_of(path)
        .ok_or_else(|| anyhow!("path '{}' is not inside a portal area", path))?;

    let outcome = authz::evaluate(required, &flags, path);

    if json_output {
        let value = match &outcome {
            GuardOutcome::Allow => json!({ "decision": "allow" }),
            GuardOutcome::RedirectTo(target) => {
                json!({ "decision": "redirect", "target": target })
            }
        };
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        match outcome {
            GuardOutcome::Allow => println!("allow: {} may render {}", role, path),
            GuardOutcome::RedirectTo(target) => println!("redirect: {} -> {}", path, target),
        }
    }

    Ok(())
}

/// The role owning the area a path belongs to
fn area_of(path: &str) -> Option<Role> {
    Role::PRIORITY.into_iter().find(|role| {
        let root = role.area_root();
        path.trim_end_matches('/') == root || path.starts_with(&format!("{}/", root))
    })
}
