/// Integer that is displayed with `'` between groups of three digits.
pub struct NiceInt(i128);

impl NiceInt {
    pub fn from(value: impl Into<i128>) -> Self {
        Self(value.into())
    }

    pub fn from_usize(value: usize) -> Self {
        Self(value as i128)
    }
}

impl std::fmt::Display for NiceInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", with_delimiters(self.0))
    }
}

fn with_delimiters(value: i128) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        result.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            result.push('\'');
        }
        result.push(c);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::NiceInt;

    #[test]
    fn delimiters() {
        assert_eq!(NiceInt::from(0).to_string(), "0");
        assert_eq!(NiceInt::from(999).to_string(), "999");
        assert_eq!(NiceInt::from(1000).to_string(), "1'000");
        assert_eq!(NiceInt::from_usize(65_536).to_string(), "65'536");
        assert_eq!(NiceInt::from(-1_234_567).to_string(), "-1'234'567");
    }
}
