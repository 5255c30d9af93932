//! Sequential peek/consume over the process arguments.

use crate::error::ScaffoldError;

/// Forward-only reader over an immutable argument list.
///
/// The list includes the program name at index 0; reading starts at 1.
/// The position only ever moves forward, one step per successful
/// [`consume`](ArgCursor::consume).
#[derive(Debug, Clone)]
pub struct ArgCursor<'a> {
    args: &'a [String],
    position: usize,
}

impl<'a> ArgCursor<'a> {
    /// Start reading right after the program name.
    pub fn new(args: &'a [String]) -> Self {
        Self { args, position: 1 }
    }

    /// Whether an argument is left at the current position.
    pub fn has_next(&self) -> bool {
        self.position < self.args.len()
    }

    /// Current position, counting the program name as 0.
    #[cfg(test)]
    pub(crate) fn position(&self) -> usize {
        self.position
    }

    /// Look at the current argument without moving.
    ///
    /// `description` says what the caller expected there; it ends up in the
    /// [`ScaffoldError::MissingArgument`] diagnostic.
    pub fn peek(&self, description: &str) -> Result<&'a str, ScaffoldError> {
        match self.args.get(self.position) {
            Some(arg) => Ok(arg.as_str()),
            None => Err(ScaffoldError::MissingArgument {
                description: description.to_string(),
                position: self.position,
                arguments: self.args.to_vec(),
            }),
        }
    }

    /// Read the current argument and move past it.
    ///
    /// On failure the position is left untouched.
    pub fn consume(&mut self, description: &str) -> Result<&'a str, ScaffoldError> {
        let value = self.peek(description)?;
        self.position += 1;
        Ok(value)
    }
}
