use anyhow::{anyhow, Result};

use crate::authz::{filter_for_role, NavItem, Role};
use crate::state;

/// Print the menu a role would see, from the configured navigation tree
pub async fn handle(role: &str, json_output: bool) -> Result<()> {
    let role = Role::parse(role).ok_or_else(|| anyhow!("unrecognized role '{}'", role))?;

    let app_state = state::from_global_config()?;
    let menu = filter_for_role(&app_state.nav_tree, Some(role));

    if json_output {
        println!("{}", serde_json::to_string_pretty(&menu)?);
    } else if menu.is_empty() {
        println!("(no menu entries for {})", role);
    } else {
        print_items(&menu, 0);
    }

    Ok(())
}

fn print_items(items: &[NavItem], depth: usize) {
    for item in items {
        println!("{}{} -> {}", "  ".repeat(depth), item.title, item.url);
        print_items(&item.items, depth + 1);
    }
}
