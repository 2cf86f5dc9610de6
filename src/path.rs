use tracing::instrument;

use crate::errors::{TreeError, TreeResult};

/// Child discipline of a tree, chosen per operation by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeMode {
    /// At most two named children, addressed by 'L'/'R'
    Binary,
    /// Ordered list of children, addressed by index
    General,
}

/// One step of a root-to-node walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Left,
    Right,
    Child(usize),
}

/// Delimiter between indices in a general-mode path, e.g. "0-2-1".
pub const INDEX_DELIMITER: char = '-';

/// Parse a directional path into steps.
///
/// Binary mode accepts a non-empty string over {L, R} (case-insensitive).
/// General mode accepts dash-separated non-negative indices.
#[instrument(level = "debug")]
pub fn parse_path(path: &str, mode: TreeMode) -> TreeResult<Vec<Step>> {
    if path.is_empty() {
        return Err(TreeError::PathSyntax {
            path: path.to_string(),
            token: String::new(),
            reason: "path cannot be empty".to_string(),
        });
    }

    match mode {
        TreeMode::Binary => path
            .chars()
            .map(|direction| match direction.to_ascii_uppercase() {
                'L' => Ok(Step::Left),
                'R' => Ok(Step::Right),
                other => Err(TreeError::PathSyntax {
                    path: path.to_string(),
                    token: other.to_string(),
                    reason: "use 'L' or 'R'".to_string(),
                }),
            })
            .collect(),
        TreeMode::General => path
            .split(INDEX_DELIMITER)
            .map(|token| {
                token
                    .parse::<usize>()
                    .map(Step::Child)
                    .map_err(|_| TreeError::PathSyntax {
                        path: path.to_string(),
                        token: token.to_string(),
                        reason: "use a non-negative child index".to_string(),
                    })
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("L", vec![Step::Left])]
    #[case("lr", vec![Step::Left, Step::Right])]
    #[case("RRL", vec![Step::Right, Step::Right, Step::Left])]
    fn test_parse_binary_path(#[case] path: &str, #[case] expected: Vec<Step>) {
        assert_eq!(parse_path(path, TreeMode::Binary).unwrap(), expected);
    }

    #[rstest]
    #[case("0", vec![Step::Child(0)])]
    #[case("0-2-1", vec![Step::Child(0), Step::Child(2), Step::Child(1)])]
    fn test_parse_general_path(#[case] path: &str, #[case] expected: Vec<Step>) {
        assert_eq!(parse_path(path, TreeMode::General).unwrap(), expected);
    }

    #[rstest]
    #[case("LX", TreeMode::Binary)]
    #[case("0-x", TreeMode::General)]
    #[case("1--2", TreeMode::General)]
    #[case("", TreeMode::Binary)]
    #[case("", TreeMode::General)]
    fn test_invalid_paths_are_syntax_errors(#[case] path: &str, #[case] mode: TreeMode) {
        assert!(matches!(
            parse_path(path, mode),
            Err(TreeError::PathSyntax { .. })
        ));
    }
}
