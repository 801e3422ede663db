//! Interactive repository selection

use crate::error::Result;
use crate::models::RepositoryCandidate;
use crate::prompt::Prompter;

const SELECT_PROMPT: &str = "Select repositories to clone:";

/// Let the operator pick which candidates to clone.
///
/// The returned list keeps listing order regardless of the order items were
/// ticked in. An empty selection is a valid answer.
pub fn select_repositories<P>(
    prompter: &P,
    candidates: Vec<RepositoryCandidate>,
) -> Result<Vec<RepositoryCandidate>>
where
    P: Prompter + ?Sized,
{
    let labels: Vec<String> = candidates
        .iter()
        .map(RepositoryCandidate::selection_label)
        .collect();

    let mut chosen = prompter.multi_select(SELECT_PROMPT, &labels)?;
    chosen.sort_unstable();
    chosen.dedup();

    Ok(candidates
        .into_iter()
        .enumerate()
        .filter(|(index, _)| chosen.binary_search(index).is_ok())
        .map(|(_, candidate)| candidate)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::sample_repo;
    use crate::prompt::{Answer, ScriptedPrompter};

    fn candidates(names: &[&str]) -> Vec<RepositoryCandidate> {
        names
            .iter()
            .map(|name| RepositoryCandidate::from(sample_repo(name)))
            .collect()
    }

    #[test]
    fn test_selection_preserves_listing_order() {
        let prompter = ScriptedPrompter::new(vec![Answer::Select(vec![2, 0])]);

        let selected =
            select_repositories(&prompter, candidates(&["alpha", "beta", "gamma"])).unwrap();

        let names: Vec<&str> = selected.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "gamma"]);
        assert_eq!(prompter.asked(), vec![SELECT_PROMPT]);
    }

    #[test]
    fn test_empty_selection_is_valid() {
        let prompter = ScriptedPrompter::new(vec![Answer::Select(vec![])]);

        let selected = select_repositories(&prompter, candidates(&["alpha"])).unwrap();

        assert!(selected.is_empty());
    }

    #[test]
    fn test_repeated_indices_select_once() {
        let prompter = ScriptedPrompter::new(vec![Answer::Select(vec![1, 1])]);

        let selected = select_repositories(&prompter, candidates(&["alpha", "beta"])).unwrap();

        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name, "beta");
    }
}
