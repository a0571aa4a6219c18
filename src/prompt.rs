use thiserror::Error;

/// Answer to the yes/no half of the extinction prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Yes,
    No,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PromptError {
    #[error("Empty answer")]
    Empty,

    #[error("Expected 1 (yes) or 2 (no), found \"{got}\"")]
    UnrecognizedChoice { got: String },

    #[error("Expected a non-negative number of cells, found \"{got}\"")]
    InvalidCount { got: String },
}

/// Parse the answer to "add more cells?". Accepts the menu numbers `1` and `2` as well as
/// `y`/`yes` and `n`/`no`, in any case.
pub fn parse_choice(line: &str) -> Result<Choice, PromptError> {
    let answer = line.trim();

    if answer.is_empty() {
        return Err(PromptError::Empty);
    }

    match answer.to_ascii_lowercase().as_str() {
        "1" | "y" | "yes" => Ok(Choice::Yes),
        "2" | "n" | "no" => Ok(Choice::No),
        _ => Err(PromptError::UnrecognizedChoice {
            got: answer.to_string(),
        }),
    }
}

/// Parse the number of cells to add.
pub fn parse_count(line: &str) -> Result<usize, PromptError> {
    let answer = line.trim();

    if answer.is_empty() {
        return Err(PromptError::Empty);
    }

    answer.parse().map_err(|_| PromptError::InvalidCount {
        got: answer.to_string(),
    })
}

#[cfg(test)]
mod test {
    use super::Choice;
    use super::PromptError;
    use super::parse_choice;
    use super::parse_count;

    #[test]
    fn choices() {
        for yes in ["1", "y", "Yes", " YES \n"] {
            assert_eq!(parse_choice(yes), Ok(Choice::Yes), "{yes:?}");
        }

        for no in ["2", "n", "No", "no\r\n"] {
            assert_eq!(parse_choice(no), Ok(Choice::No), "{no:?}");
        }
    }

    #[test]
    fn bad_choice() {
        assert_eq!(parse_choice("  \n"), Err(PromptError::Empty));
        assert_eq!(
            parse_choice("maybe\n"),
            Err(PromptError::UnrecognizedChoice {
                got: "maybe".to_string()
            })
        );
    }

    #[test]
    fn counts() {
        assert_eq!(parse_count("250\n"), Ok(250));
        assert_eq!(parse_count("0"), Ok(0));
        assert_eq!(
            parse_count("-4"),
            Err(PromptError::InvalidCount {
                got: "-4".to_string()
            })
        );
        assert_eq!(
            parse_count("lots"),
            Err(PromptError::InvalidCount {
                got: "lots".to_string()
            })
        );
    }
}
