//! Functions for formatting move sequences.

use itertools::Itertools;

use crate::TurnId;

/// Formats a sequence of turns as a comma-separated string like `U, R', F`.
///
/// An empty sequence formats as the empty string; there is no trailing
/// separator.
pub fn format_move_list(turns: impl IntoIterator<Item = TurnId>) -> String {
    turns.into_iter().map(|turn| turn.to_string()).join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_move_list() {
        assert_eq!("", format_move_list([]));
        assert_eq!("F", format_move_list([TurnId::F]));
        assert_eq!(
            "U, R', F",
            format_move_list([TurnId::U, TurnId::RPrime, TurnId::F]),
        );
        assert_eq!(
            "D', D', D', D'",
            format_move_list([TurnId::DPrime; 4]),
        );
    }
}
