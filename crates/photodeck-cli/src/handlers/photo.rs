//! Photo lookup and favorite toggle handlers.

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::print_photo_details;

/// Show one photo. Saved favorites are served without a network call.
pub async fn execute(ctx: &CliContext, id: i64) -> Result<(), CliError> {
    let photo = ctx.service().get_photo_by_id(id).await?;
    let is_favorite = ctx.service().is_favorite(id).await?;
    print_photo_details(&photo, is_favorite);
    Ok(())
}

/// Toggle favorite membership of a photo.
pub async fn toggle_favorite(ctx: &CliContext, id: i64) -> Result<(), CliError> {
    let photo = ctx.service().get_photo_by_id(id).await?;

    if ctx.service().toggle_favorite(&photo).await? {
        println!("Added photo {id} by {} to favorites.", photo.photographer);
    } else {
        println!("Removed photo {id} from favorites.");
    }
    Ok(())
}
