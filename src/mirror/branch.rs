use log::*;

use crate::{error::MirrorError, forge::manager::ForgeManager, result::Result};

/// Return the first branch, in forge order, whose name satisfies
/// `is_translation_branch`. Only the first page of branches is searched.
pub async fn find_translation_branch<P>(
    forge: &ForgeManager,
    mut is_translation_branch: P,
) -> Result<String>
where
    P: FnMut(&str) -> bool,
{
    let branches = forge.list_branches().await?;

    let branch = branches
        .into_iter()
        .find(|name| is_translation_branch(name))
        .ok_or(MirrorError::TranslationBranchNotFound)?;

    info!("found translation branch: {branch}");

    Ok(branch)
}
