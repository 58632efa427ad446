use std::fmt;

/// One labeled result line, e.g. `1+2 = 3`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    operands: Vec<i64>,
    result: i64,
}

impl Report {
    pub fn new(operands: impl Into<Vec<i64>>, result: i64) -> Self {
        Self {
            operands: operands.into(),
            result,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.operands.iter();
        if let Some(first) = iter.next() {
            write!(f, "{first}")?;
        }
        for operand in iter {
            write!(f, "+{operand}")?;
        }
        write!(f, " = {}", self.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_two_operands() {
        assert_eq!(Report::new([1, 2], 3).to_string(), "1+2 = 3");
    }

    #[test]
    fn test_display_three_operands() {
        assert_eq!(Report::new([1, 2, 3], 6).to_string(), "1+2+3 = 6");
    }

    #[test]
    fn test_display_negative_operand() {
        // no special casing, the sign is kept next to the plus
        assert_eq!(Report::new([4, -1], 3).to_string(), "4+-1 = 3");
    }
}
