use std::fmt;
use std::str::FromStr;

use super::errors::DomainError;

/// A validated, strictly positive customer key.
///
/// The only way to obtain one is through [`FromStr`] or [`TryFrom<i32>`], so
/// anything holding a `CustomerId` has already passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CustomerId(i32);

impl CustomerId {
    pub fn get(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for CustomerId {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        if value <= 0 {
            return Err(DomainError::InvalidInput(
                "Customer ID must be greater than 0.".to_string(),
            ));
        }
        Ok(Self(value))
    }
}

impl FromStr for CustomerId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i32 = s.trim().parse().map_err(|_| {
            DomainError::InvalidInput("Invalid input. Please enter a valid customer ID.".to_string())
        })?;
        Self::try_from(value)
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejection(input: &str) -> String {
        match input.parse::<CustomerId>() {
            Err(DomainError::InvalidInput(msg)) => msg,
            other => panic!("expected InvalidInput for {input:?}, got {other:?}"),
        }
    }

    #[test]
    fn parses_positive_integers() {
        assert_eq!("1".parse::<CustomerId>().unwrap().get(), 1);
        assert_eq!("42".parse::<CustomerId>().unwrap().get(), 42);
    }

    #[test]
    fn ignores_surrounding_whitespace() {
        assert_eq!(" 7 \t".parse::<CustomerId>().unwrap().get(), 7);
    }

    #[test]
    fn rejects_non_integers() {
        for input in ["", "   ", "abc", "1.5", "1e3", "99999999999"] {
            assert_eq!(
                rejection(input),
                "Invalid input. Please enter a valid customer ID."
            );
        }
    }

    #[test]
    fn rejects_zero_and_negatives() {
        for input in ["0", "-5", "-2147483648"] {
            assert_eq!(rejection(input), "Customer ID must be greater than 0.");
        }
    }

    #[test]
    fn try_from_enforces_the_same_bound() {
        assert!(CustomerId::try_from(0).is_err());
        assert_eq!(CustomerId::try_from(3).unwrap().to_string(), "3");
    }
}
