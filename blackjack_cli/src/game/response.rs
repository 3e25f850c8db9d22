//! Parsing of the free text answers typed at the prompts.

use super::Action;
use blackjack_lib::BlackjackGameError;
use lazy_static::lazy_static;
use std::collections::HashMap;

/// Canonical answers the game understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Response {
    Yes,
    No,
    Hit,
    Stand,
}

impl Response {
    /// The game action a response stands for. Yes and no are not moves and are rejected.
    pub fn action(&self) -> Result<Action, BlackjackGameError> {
        match self {
            Response::Hit => Ok(Action::Hit),
            Response::Stand => Ok(Action::Stand),
            Response::Yes | Response::No => {
                Err(BlackjackGameError::InvalidInput(format!("{:?}", self)))
            }
        }
    }
}

lazy_static! {
    /// Every accepted token, upper cased, and the answer it maps to.
    static ref RESPONSES: HashMap<&'static str, Response> = {
        let mut table = HashMap::new();
        for (token, response) in [
            ("Y", Response::Yes),
            ("YES", Response::Yes),
            ("N", Response::No),
            ("NO", Response::No),
            ("H", Response::Hit),
            ("HIT", Response::Hit),
            ("S", Response::Stand),
            ("STAND", Response::Stand),
        ] {
            table.insert(token, response);
        }
        table
    };
}

/// The two kinds of questions asked during a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    YesNo,
    HitStand,
}

impl Prompt {
    /// Whether `response` is a valid answer to this prompt.
    pub fn accepts(&self, response: Response) -> bool {
        match self {
            Prompt::YesNo => matches!(response, Response::Yes | Response::No),
            Prompt::HitStand => matches!(response, Response::Hit | Response::Stand),
        }
    }

    /// Parses a line typed by the user. Case and surrounding whitespace are ignored.
    pub fn parse(&self, input: &str) -> Result<Response, BlackjackGameError> {
        let token = input.trim().to_uppercase();
        match RESPONSES.get(token.as_str()) {
            Some(response) if self.accepts(*response) => Ok(*response),
            _ => Err(BlackjackGameError::InvalidInput(input.trim().to_string())),
        }
    }

    /// Message shown after an answer was rejected.
    pub fn reprompt(&self) -> &'static str {
        match self {
            Prompt::YesNo => "Please respond with yes or no.",
            Prompt::HitStand => "\n\nPlease respond with H to HIT or S to STAND.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_words_and_letters_in_any_case() {
        for input in ["y", "Y", "yes", "YeS", "  yes \n"] {
            assert_eq!(Prompt::YesNo.parse(input), Ok(Response::Yes));
        }
        for input in ["n", "NO", "No\r\n"] {
            assert_eq!(Prompt::YesNo.parse(input), Ok(Response::No));
        }
        for input in ["h", "hit", "HIT"] {
            assert_eq!(Prompt::HitStand.parse(input), Ok(Response::Hit));
        }
        for input in ["s", "Stand", " S "] {
            assert_eq!(Prompt::HitStand.parse(input), Ok(Response::Stand));
        }
    }

    #[test]
    fn rejects_answers_meant_for_the_other_prompt() {
        assert_eq!(
            Prompt::YesNo.parse("hit"),
            Err(BlackjackGameError::InvalidInput("hit".to_string()))
        );
        assert!(Prompt::HitStand.parse("yes").is_err());
    }

    #[test]
    fn rejects_unknown_tokens() {
        for input in ["", "yep", "stay", "h i t", "42"] {
            assert!(Prompt::YesNo.parse(input).is_err());
            assert!(Prompt::HitStand.parse(input).is_err());
        }
    }

    #[test]
    fn moves_map_to_actions() {
        assert_eq!(Response::Hit.action(), Ok(Action::Hit));
        assert_eq!(Response::Stand.action(), Ok(Action::Stand));
    }

    #[test]
    fn yes_and_no_are_not_moves() {
        assert_eq!(
            Response::Yes.action(),
            Err(BlackjackGameError::InvalidInput("Yes".to_string()))
        );
        assert!(Response::No.action().is_err());
    }
}
