use strum_macros::Display;

/// How long a resolved service lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Lifetime {
    /// One shared instance per container, built on first resolution
    Singleton,
    /// A fresh instance for every resolution
    Transient,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_snake_case() {
        assert_eq!(Lifetime::Singleton.to_string(), "singleton");
        assert_eq!(Lifetime::Transient.to_string(), "transient");
    }
}
