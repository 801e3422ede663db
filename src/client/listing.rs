//! Repository listing for a user or organization

use log::debug;

use super::{AccountKind, GitHubApi, ListParams};
use crate::error::{ApiError, Error, Result};
use crate::models::RepositoryCandidate;
use crate::validate::Limit;

/// Decide whether `target` is an organization or a user.
///
/// The organization lookup is tried first; any failure there falls through to
/// the user lookup, whose error is returned if it fails too.
pub async fn classify_target<A>(api: &A, target: &str) -> Result<AccountKind>
where
    A: GitHubApi + ?Sized,
{
    match api.get_org(target).await {
        Ok(_) => {
            debug!("{} is an organization", target);
            return Ok(AccountKind::Organization);
        }
        Err(err) => debug!("Organization lookup for {} failed: {}", target, err),
    }

    api.get_user(target)
        .await
        .map(|_| AccountKind::User)
        .map_err(|err| name_target(err, target))
}

/// List the most recently updated repositories of `target`, newest first.
///
/// Returns at most `limit` candidates. A single failed call fails the whole
/// listing; nothing is retried.
pub async fn list_repositories<A>(
    api: &A,
    target: &str,
    limit: Limit,
) -> Result<Vec<RepositoryCandidate>>
where
    A: GitHubApi + ?Sized,
{
    let kind = classify_target(api, target).await?;
    let params = ListParams::recently_updated(limit.get());

    debug!(
        "Fetching {} most recent repositories for {} {}",
        limit,
        kind.label(),
        target
    );

    let repos = match kind {
        AccountKind::Organization => api.list_org_repos(target, &params).await,
        AccountKind::User => api.list_user_repos(target, &params).await,
    }
    .map_err(|err| name_target(err, target))?;

    debug!("Fetched {} repositories", repos.len());

    Ok(repos
        .into_iter()
        .take(limit.get() as usize)
        .map(RepositoryCandidate::from)
        .collect())
}

/// Make sure a not-found error names the target the operator typed.
fn name_target(err: Error, target: &str) -> Error {
    match err {
        Error::Api(ApiError::NotFound(_)) => ApiError::NotFound(target.to_string()).into(),
        other => other,
    }
}
