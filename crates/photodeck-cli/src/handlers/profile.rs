//! Profile handlers.

use photodeck_core::ProfileCoordinator;

use super::join;
use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::format_optional;

/// Print the stored profile.
pub async fn show(ctx: &CliContext) -> Result<(), CliError> {
    let Some(profile) = ctx.service().get_user_profile().await? else {
        println!("No profile saved yet.");
        println!("Use 'photodeck profile set --name <name>' to create one.");
        return Ok(());
    };

    println!("Name:   {}", format_optional(profile.name.as_ref(), "--"));
    println!("Avatar: {}", format_optional(profile.avatar.as_ref(), "--"));
    Ok(())
}

/// Update the profile. Omitted fields keep their stored value; an empty
/// avatar removes it.
pub async fn set(
    ctx: &CliContext,
    name: Option<String>,
    avatar: Option<String>,
) -> Result<(), CliError> {
    if name.is_none() && avatar.is_none() {
        return Err(CliError::Arguments(
            "pass --name and/or --avatar".to_string(),
        ));
    }

    let current = ctx.service().get_user_profile().await?.unwrap_or_default();
    let name = name.or(current.name).unwrap_or_default();
    let avatar = match avatar {
        Some(a) if a.trim().is_empty() => None,
        Some(a) => Some(a),
        None => current.avatar,
    };

    let coordinator = ProfileCoordinator::new(ctx.service().clone());
    join(coordinator.update_profile(&name, avatar.as_deref())).await?;

    if let Some(error) = coordinator.profile().save_error {
        return Err(CliError::Database(error));
    }
    println!("Profile saved.");
    Ok(())
}
