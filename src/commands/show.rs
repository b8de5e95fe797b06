//! Implementation of the `cachecfg show` command.
//!
//! Displays the resolved policy of each action, including `DEFAULT`.

use crate::cli::ShowArgs;
use crate::compiler::emit::Registration;
use crate::compiler::registrations;
use crate::config::{DEFAULT_ACTION, FlatConfig, get_configuration};
use crate::error::{CacheCfgError, Result};

/// Execute the `cachecfg show` command.
pub fn cmd_show(args: ShowArgs) -> Result<()> {
    let config = get_configuration(&args.files)?;
    print!("{}", render(&config, args.action.as_deref())?);
    Ok(())
}

fn render(config: &FlatConfig, only: Option<&str>) -> Result<String> {
    let all = registrations(config);
    let fallback = all.len() - 1;
    let selected: Vec<(bool, Registration)> = all
        .into_iter()
        .enumerate()
        .map(|(i, r)| (i == fallback, r))
        .filter(|(_, r)| only.is_none_or(|name| r.action == name))
        .collect();

    if let Some(name) = only
        && selected.is_empty()
    {
        let known: Vec<&str> = config.action_names().collect();
        return Err(CacheCfgError::Configuration(format!(
            "action '{}' is not configured.\n\n\
             Configured actions: {}\n\n\
             Use `--action {}` for the fallback policy.",
            name,
            if known.is_empty() {
                "(none)".to_string()
            } else {
                known.join(", ")
            },
            DEFAULT_ACTION
        )));
    }

    let mut out = String::new();
    for (is_fallback, registration) in &selected {
        let inherits = *is_fallback
            || config
                .action(&registration.action)
                .is_some_and(|section| section.is_empty());
        out.push_str(&render_registration(registration, *is_fallback, inherits));
    }
    Ok(out)
}

/// The pseudo-action's banner is suffixed so a configured `DEFAULT` action
/// stays distinguishable from it.
fn render_registration(registration: &Registration, is_fallback: bool, inherits: bool) -> String {
    let policy = &registration.policy;
    let rule = "=".repeat(80);
    let title = if is_fallback {
        format!("{} (fallback)", registration.action)
    } else {
        registration.action.clone()
    };
    let mut out = format!("{}\n{}\n{}\n", rule, title, rule);

    if inherits {
        out.push_str("(all settings from `all` or built-in defaults)\n");
    }

    out.push_str(&format!("Enabled:         {}\n", policy.enabled));
    out.push_str(&format!("With layout:     {}\n", policy.with_layout));
    out.push_str(&format!("Lifetime:        {}s\n", policy.lifetime));
    out.push_str(&format!("Client lifetime: {}s\n", policy.client_lifetime));
    out.push_str(&format!("Contextual:      {}\n", policy.contextual));
    out.push_str(&format!(
        "Vary:            {}\n\n",
        if policy.vary.is_empty() {
            "(none)".to_string()
        } else {
            policy.vary.join(", ")
        }
    ));
    out
}
