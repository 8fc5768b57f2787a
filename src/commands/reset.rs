use anyhow::{bail, Context as _, Result};
use serde_json::json;

use roster::application::Store;
use roster::domain::ports::StateRepository;
use roster::infrastructure::JsonStateRepository;
use roster::presentation::factory::state_location;

use super::Context;

/// Overwrite saved state with seed data.
///
/// Works on unreadable or incompatible state files, which is what the
/// version mismatch error points users to.
pub fn cmd_reset(ctx: &Context, yes: bool) -> Result<()> {
    if !yes {
        bail!("reset replaces every role and assignment with seed data; pass --yes to confirm");
    }

    let (dir, key) = state_location(&ctx.config);
    let repo = JsonStateRepository::new(&dir, &key);
    let path = repo.path().to_path_buf();
    repo.clear()
        .with_context(|| format!("failed to remove {}", path.display()))?;

    let store = Store::open(repo, ctx.config.roles.id_policy)?;

    ctx.notify(
        "Roster reset to seed data",
        json!({
            "path": path,
            "employees": store.employees().len(),
            "roles": store.roles().len(),
        }),
    )
}
